//! Board construction and lookup errors

use crate::board::CellId;
use crate::types::TileKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero (got {rows}x{cols})")]
    EmptyDimensions { rows: usize, cols: usize },

    #[error("tile kind count must be at least 1")]
    NoTileKinds,

    #[error("layout has {actual} cells, expected {expected}")]
    LayoutSize { expected: usize, actual: usize },

    #[error("tile kind {kind} at index {index} is outside 1..={max}")]
    KindOutOfRange {
        index: usize,
        kind: TileKind,
        max: TileKind,
    },

    #[error("cell {0} is not on the board")]
    UnknownCell(CellId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::KindOutOfRange {
            index: 4,
            kind: 9,
            max: 7,
        };
        assert_eq!(err.to_string(), "tile kind 9 at index 4 is outside 1..=7");

        let err = BoardError::EmptyDimensions { rows: 0, cols: 3 };
        assert_eq!(err.to_string(), "board dimensions must be non-zero (got 0x3)");
    }
}
