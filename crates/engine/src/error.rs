use thiserror::Error;

use crate::core::BoardError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// Input arrived while a cascade or revert is still running
    #[error("board is locked while a turn resolves")]
    BoardLocked,

    #[error("swap requested without two picked cells")]
    IncompleteSelection,

    #[error("cell index {index} is outside a board of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}
