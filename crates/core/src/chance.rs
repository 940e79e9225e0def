//! Chance module - counts single-swap moves that would create a match
//!
//! Two fixtures are recognised, each scanned along rows (heading right) and columns
//! (heading down):
//!
//! - **Pair**: a maximal run of at least two same-kind cells. One step past either
//!   end of the run sits the "lookaround" cell. If a cell of the run's kind touches
//!   the lookaround from any side except the run's own side, swapping it into the
//!   lookaround completes a run of three.
//! - **Gap**: two same-kind cells separated by exactly one foreign "hole" cell. If a
//!   cell of that kind touches the hole from the side (neither the heading nor the
//!   reverse direction), swapping it into the hole completes the run.
//!
//! Every counted fixture also yields the concrete [`SwapHint`] that completes it.
//! A total of zero means no swap on the board can produce a match.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::board::Board;
use crate::types::{Direction, TileKind};

/// An adjacent swap that completes a chance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SwapHint {
    /// Index of the cell that moves in
    pub from: usize,
    /// Index it moves to
    pub to: usize,
}

/// Result of a board-wide chance scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChanceReport {
    pub pair_row: u32,
    pub pair_column: u32,
    pub gap_row: u32,
    pub gap_column: u32,
    /// One hint per counted chance, in scan order
    pub hints: Vec<SwapHint>,
}

impl ChanceReport {
    /// Total chances across both heuristics and both axes
    pub fn total(&self) -> u32 {
        self.pair_row + self.pair_column + self.gap_row + self.gap_column
    }

    /// No swap can create a match
    pub fn is_stalemate(&self) -> bool {
        self.total() == 0
    }

    pub fn first_hint(&self) -> Option<SwapHint> {
        self.hints.first().copied()
    }
}

/// Scan the whole board
pub fn analyze(board: &Board) -> ChanceReport {
    let mut report = ChanceReport::default();
    report.pair_row = pair_chances(board, Direction::Right, &mut report.hints);
    report.pair_column = pair_chances(board, Direction::Down, &mut report.hints);
    report.gap_row = gap_chances(board, Direction::Right, &mut report.hints);
    report.gap_column = gap_chances(board, Direction::Down, &mut report.hints);
    report
}

/// Total chances on the board
pub fn count_chances(board: &Board) -> u32 {
    analyze(board).total()
}

/// First swap that would create a match, if any
pub fn first_hint(board: &Board) -> Option<SwapHint> {
    analyze(board).first_hint()
}

/// Neighbors of `center` joining `kind`, skipping the `excluded` directions
fn seek_auxes(
    board: &Board,
    center: usize,
    kind: TileKind,
    excluded: &[Direction],
) -> ArrayVec<usize, 4> {
    let geometry = board.geometry();
    Direction::ALL
        .into_iter()
        .filter(|dir| !excluded.contains(dir))
        .filter_map(|dir| geometry.neighbor(center, dir))
        .filter(|&i| board.cell(i).joins(kind))
        .collect()
}

/// Look one step past `tip` towards `dir` and search around that cell,
/// never back towards the run
fn probe_lookaround(
    board: &Board,
    tip: usize,
    dir: Direction,
    kind: TileKind,
) -> Option<SwapHint> {
    let lookaround = board.geometry().neighbor(tip, dir)?;
    if board.cell(lookaround).matched {
        return None;
    }
    let auxes = seek_auxes(board, lookaround, kind, &[dir.opposite()]);
    auxes.first().map(|&aux| SwapHint {
        from: aux,
        to: lookaround,
    })
}

fn pair_chances(board: &Board, heading: Direction, hints: &mut Vec<SwapHint>) -> u32 {
    let geometry = board.geometry();
    let reverse = heading.opposite();
    let mut count = 0;

    for start in 0..board.len() {
        let cell = board.cell(start);
        if cell.matched {
            continue;
        }
        let kind = cell.kind;

        // Only scan from the first cell of a run.
        if let Some(prev) = geometry.neighbor(start, reverse) {
            if board.cell(prev).joins(kind) {
                continue;
            }
        }

        let mut end = start;
        let mut len = 1;
        while let Some(next) = geometry.neighbor(end, heading) {
            if !board.cell(next).joins(kind) {
                break;
            }
            end = next;
            len += 1;
        }
        if len < 2 {
            continue;
        }

        for (tip, dir) in [(start, reverse), (end, heading)] {
            if let Some(hint) = probe_lookaround(board, tip, dir, kind) {
                hints.push(hint);
                count += 1;
            }
        }
    }

    count
}

fn gap_chances(board: &Board, heading: Direction, hints: &mut Vec<SwapHint>) -> u32 {
    let geometry = board.geometry();
    let reverse = heading.opposite();
    let mut count = 0;

    for start in 0..board.len() {
        let cell = board.cell(start);
        if cell.matched {
            continue;
        }
        let kind = cell.kind;

        let Some(hole) = geometry.neighbor(start, heading) else {
            continue;
        };
        let Some(far) = geometry.neighbor(hole, heading) else {
            continue;
        };
        let hole_cell = board.cell(hole);
        if hole_cell.matched || hole_cell.kind == kind || !board.cell(far).joins(kind) {
            continue;
        }

        let auxes = seek_auxes(board, hole, kind, &[heading, reverse]);
        if let Some(&aux) = auxes.first() {
            hints.push(SwapHint { from: aux, to: hole });
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_with_aux_beyond_the_run() {
        let board = Board::from_rows(2, &[&[1, 1, 2, 1]]);
        let report = analyze(&board);
        assert_eq!(report.pair_row, 1);
        assert_eq!(report.gap_row, 0);
        assert_eq!(report.total(), 1);
        assert_eq!(report.hints, vec![SwapHint { from: 3, to: 2 }]);
    }

    #[test]
    fn test_pair_in_column() {
        let board = Board::from_rows(2, &[&[1], &[1], &[2], &[1]]);
        let report = analyze(&board);
        assert_eq!(report.pair_column, 1);
        assert_eq!(report.total(), 1);
        assert_eq!(report.first_hint(), Some(SwapHint { from: 3, to: 2 }));
    }

    #[test]
    fn test_gap_needs_a_side_aux() {
        let board = Board::from_rows(3, &[&[1, 2, 1], &[3, 1, 3]]);
        let report = analyze(&board);
        assert_eq!(report.gap_row, 1);
        assert_eq!(report.pair_row + report.pair_column + report.gap_column, 0);
        assert_eq!(report.hints, vec![SwapHint { from: 4, to: 1 }]);

        // Same gap with nothing beside the hole is not a chance.
        let board = Board::from_rows(3, &[&[1, 2, 1]]);
        assert_eq!(count_chances(&board), 0);
    }

    #[test]
    fn test_pair_aux_never_looks_back_into_the_run() {
        // The only kind-1 neighbor of the lookaround (index 1) is the run itself.
        let board = Board::from_rows(3, &[&[2, 3, 1, 1], &[3, 2, 3, 2]]);
        let report = analyze(&board);
        assert_eq!(report.pair_row, 0);
    }

    #[test]
    fn test_stalemate_two_by_two() {
        let board = Board::from_rows(2, &[&[1, 2], &[2, 1]]);
        let report = analyze(&board);
        assert!(report.is_stalemate());
        assert!(report.hints.is_empty());
    }

    #[test]
    fn test_diagonal_stripes_have_no_chances() {
        let rows: Vec<Vec<TileKind>> = (0..4)
            .map(|r| (0..4).map(|c| ((r + c) % 4 + 1) as TileKind).collect())
            .collect();
        let refs: Vec<&[TileKind]> = rows.iter().map(|r| r.as_slice()).collect();
        let board = Board::from_rows(4, &refs);
        assert_eq!(count_chances(&board), 0);
    }
}
