//! Scoring module - combo accounting across cascade passes
//!
//! Every match contributes one point per axis that reaches the run threshold on its
//! own, so a cross-shaped match is worth two. Passes after the first always score.
//! The first pass of a turn (the one the player's swap produced) is governed by an
//! [`InitialPassRule`]:
//!
//! - `Always`: scores like any other pass
//! - `Compound`: scores only with more than one qualifying axis or more than one match
//! - `Never`: never scores

use crate::matcher::MatchSet;
use crate::types::InitialPassRule;

/// Combo points for one pass
pub fn pass_combo_points(set: &MatchSet, initial: bool, rule: InitialPassRule) -> u32 {
    let axes = set.qualifying_axes();
    if !initial {
        return axes;
    }

    match rule {
        InitialPassRule::Always => axes,
        InitialPassRule::Compound if axes > 1 || set.matches().len() > 1 => axes,
        InitialPassRule::Compound | InitialPassRule::Never => 0,
    }
}

/// Running totals for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnTally {
    pub passes: u32,
    pub matched_cells: u32,
    pub combo: u32,
}

impl TurnTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pass; the first recorded pass is the initial one
    ///
    /// Returns the combo points the pass earned.
    pub fn record_pass(&mut self, set: &MatchSet, rule: InitialPassRule) -> u32 {
        let points = pass_combo_points(set, self.passes == 0, rule);
        self.passes += 1;
        self.matched_cells += set.len() as u32;
        self.combo += points;
        points
    }
}
