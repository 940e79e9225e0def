//! Picker module - two-slot tile selection
//!
//! The picker turns a stream of cell activations into swap requests. A swap is
//! requested only when the second pick is orthogonally adjacent to the first and of
//! a different kind; every other click adjusts or resets the selection.

use crate::board::{Board, CellId};
use crate::types::{Direction, WrongPickPolicy};

/// Selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickState {
    None,
    FirstPicked,
    SecondPicked,
}

#[derive(Debug, Clone, Default)]
pub struct TilePicker {
    first: Option<CellId>,
    second: Option<CellId>,
    policy: WrongPickPolicy,
}

impl TilePicker {
    pub fn new(policy: WrongPickPolicy) -> Self {
        Self {
            first: None,
            second: None,
            policy,
        }
    }

    pub fn first(&self) -> Option<CellId> {
        self.first
    }

    pub fn second(&self) -> Option<CellId> {
        self.second
    }

    /// Both picks, when a swap is pending
    pub fn pair(&self) -> Option<(CellId, CellId)> {
        self.first.zip(self.second)
    }

    pub fn policy(&self) -> WrongPickPolicy {
        self.policy
    }

    pub fn state(&self) -> PickState {
        match (self.first, self.second) {
            (None, _) => PickState::None,
            (Some(_), None) => PickState::FirstPicked,
            (Some(_), Some(_)) => PickState::SecondPicked,
        }
    }

    /// Handle an activation of cell `id`
    ///
    /// Returns the direction from the first pick to `id` when the click completes
    /// a valid pair; the caller should then swap and evaluate. Returns None when
    /// the click only changed the selection.
    pub fn select(&mut self, board: &Board, id: CellId) -> Option<Direction> {
        let Some(first) = self.first else {
            self.first = Some(id);
            return None;
        };

        if first == id {
            self.reset();
            return None;
        }

        let kind_of = |cell: CellId| board.cell_by_id(cell).map(|c| c.kind);
        if kind_of(first).is_some() && kind_of(first) == kind_of(id) {
            self.repick(id);
            return None;
        }

        if self.second.is_none() {
            if let Some(dir) = self.direction_from_first(board, first, id) {
                self.second = Some(id);
                return Some(dir);
            }
        }

        // Second slot already taken, or the click is not adjacent.
        match self.policy {
            WrongPickPolicy::Repick => self.repick(id),
            WrongPickPolicy::Ignore => self.reset(),
        }
        None
    }

    /// Clear both picks; idempotent
    pub fn reset(&mut self) {
        self.first = None;
        self.second = None;
    }

    fn repick(&mut self, id: CellId) {
        self.reset();
        self.first = Some(id);
    }

    fn direction_from_first(&self, board: &Board, first: CellId, id: CellId) -> Option<Direction> {
        let from = board.index_of(first)?;
        let to = board.index_of(id)?;
        board.geometry().direction_between(from, to)
    }
}
