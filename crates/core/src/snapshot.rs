use std::fmt;

use serde::Serialize;

use crate::board::Board;
use crate::types::TileKind;

/// Plain view of a board for logs and reports
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Tile kinds, row-major
    pub tiles: Vec<TileKind>,
    /// Indices of matched cells still waiting for refill
    pub matched: Vec<usize>,
}

impl BoardSnapshot {
    pub fn row(&self, row: usize) -> &[TileKind] {
        let start = row * self.cols;
        &self.tiles[start..start + self.cols]
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            rows: board.rows(),
            cols: board.cols(),
            tiles: board.kinds(),
            matched: board.holes(),
        }
    }
}

/// One line per row; matched cells print as `.`
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let index = row * self.cols + col;
                if col > 0 {
                    f.write_str(" ")?;
                }
                if self.matched.contains(&index) {
                    f.write_str(".")?;
                } else {
                    write!(f, "{}", self.tiles[index])?;
                }
            }
            if row + 1 < self.rows {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_grid() {
        let mut board = Board::from_rows(3, &[&[1, 2, 3], &[3, 2, 1]]);
        let id = board.cell(4).id;
        board.mark_matched([id]);

        let snap = BoardSnapshot::from(&board);
        assert_eq!(snap.row(1), &[3, 2, 1]);
        assert_eq!(snap.matched, vec![4]);
        assert_eq!(snap.to_string(), "1 2 3\n3 . 1");
    }

    #[test]
    fn test_snapshot_serializes() {
        let board = Board::from_rows(2, &[&[1, 2]]);
        let snap = BoardSnapshot::from(&board);
        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(json, r#"{"rows":1,"cols":2,"tiles":[1,2],"matched":[]}"#);
    }
}
