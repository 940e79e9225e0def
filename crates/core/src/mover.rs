//! Mover module - swaps and the collapse ("bubble to top") pass
//!
//! Collapse lets every matched cell bubble upwards one row at a time by swapping it
//! with the unmatched cell directly above. A matched cell stops once it reaches the
//! top edge or sits right under another matched cell. When every matched cell has
//! stopped, each column has its holes stacked at the top and the surviving cells
//! shifted down, in their original order, by the number of holes beneath them.

use std::collections::HashSet;

use crate::board::{Board, CellId};
use crate::error::BoardError;
use crate::matcher::MatchSet;
use crate::types::Direction;

/// Exchange the board positions of two cells
pub fn swap(board: &mut Board, a: CellId, b: CellId) -> Result<(), BoardError> {
    let ia = board.index_of(a).ok_or(BoardError::UnknownCell(a))?;
    let ib = board.index_of(b).ok_or(BoardError::UnknownCell(b))?;
    board.swap_indices(ia, ib);
    Ok(())
}

/// Result of one collapse pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collapse {
    /// Cells that moved down at least once, in order of first fall
    pub falling: Vec<CellId>,
    /// Sweeps over the still-bubbling cells
    pub sweeps: usize,
    /// Individual one-row swaps performed
    pub swaps: usize,
}

/// Bubble the cells of `set` to the top of their columns
///
/// The set's cells must already be flagged matched on the board. Falling cells are
/// flagged `collapsed` until [`Board::clear_collapsed`] runs.
pub fn collapse(board: &mut Board, set: &MatchSet) -> Collapse {
    let geometry = board.geometry();
    let mut bubbling = set.board_order(board);
    let mut seen = HashSet::new();
    let mut result = Collapse::default();

    while !bubbling.is_empty() {
        result.sweeps += 1;

        bubbling.retain(|&id| {
            let Some(index) = board.index_of(id) else {
                return false;
            };
            let Some(above) = geometry.neighbor(index, Direction::Up) else {
                return false;
            };
            let falling = *board.cell(above);
            if falling.matched {
                return false;
            }

            board.swap_indices(index, above);
            board.set_collapsed(falling.id);
            if seen.insert(falling.id) {
                result.falling.push(falling.id);
            }
            result.swaps += 1;
            true
        });
    }

    result
}
