//! Matcher module - same-kind run detection around seed cells
//!
//! A seed is scanned in all four directions. Each scan walks cell by cell until it
//! hits the board edge or a cell that cannot join the run (different kind, or already
//! matched). The left/right scans form the row axis, the up/down scans the column
//! axis; a [`Match`] exists when either axis reaches [`MIN_RUN`] cells.
//!
//! There is no gap-jumping: a foreign or matched cell always ends the scan.

use std::collections::HashSet;

use crate::board::{Board, CellId};
use crate::types::{Axis, Direction, TileKind, MIN_RUN};

/// Runs through a single seed cell
///
/// Both axes are kept in board order and both contain the seed, even when only one
/// of them reaches the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub seed: CellId,
    pub row: Vec<CellId>,
    pub column: Vec<CellId>,
}

impl Match {
    pub fn axis(&self, axis: Axis) -> &[CellId] {
        match axis {
            Axis::Row => &self.row,
            Axis::Column => &self.column,
        }
    }

    /// Whether one axis reaches the match threshold on its own
    pub fn qualifies(&self, axis: Axis) -> bool {
        self.axis(axis).len() >= MIN_RUN
    }

    /// Number of axes reaching the threshold (1 or 2)
    pub fn qualifying_axes(&self) -> u32 {
        self.qualifies(Axis::Row) as u32 + self.qualifies(Axis::Column) as u32
    }

    /// Cells of the qualifying axes, the seed once
    ///
    /// A same-kind stub shorter than [`MIN_RUN`] on the other axis is not part of the
    /// match and stays on the board.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        let row: &[CellId] = if self.qualifies(Axis::Row) { &self.row } else { &[] };
        let column: &[CellId] = if self.qualifies(Axis::Column) {
            &self.column
        } else {
            &[]
        };
        let seed_in_row = !row.is_empty();
        row.iter()
            .copied()
            .chain(
                column
                    .iter()
                    .copied()
                    .filter(move |&id| !(seed_in_row && id == self.seed)),
            )
    }

    /// Number of cells cleared by this match
    pub fn cell_count(&self) -> usize {
        match (self.qualifies(Axis::Row), self.qualifies(Axis::Column)) {
            (true, true) => self.row.len() + self.column.len() - 1,
            (true, false) => self.row.len(),
            (false, true) => self.column.len(),
            (false, false) => 0,
        }
    }
}

/// Where a [`MatchSet`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// A single seed produced the whole set
    Single,
    /// Several seeds in the same evaluation pass
    Combo,
}

/// One or more matches found in the same pass, de-duplicated by cell identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    matches: Vec<Match>,
    cells: Vec<CellId>,
    source: MatchSource,
}

impl MatchSet {
    /// Aggregate matches; None when there are none
    pub fn from_matches(matches: Vec<Match>) -> Option<Self> {
        if matches.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        let cells = matches
            .iter()
            .flat_map(Match::cells)
            .filter(|id| seen.insert(*id))
            .collect();
        let source = if matches.len() > 1 {
            MatchSource::Combo
        } else {
            MatchSource::Single
        };

        Some(Self {
            matches,
            cells,
            source,
        })
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn source(&self) -> MatchSource {
        self.source
    }

    /// Distinct cells in discovery order
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains(&id)
    }

    /// Sum of qualifying axes across all matches
    pub fn qualifying_axes(&self) -> u32 {
        self.matches.iter().map(Match::qualifying_axes).sum()
    }

    /// Distinct cells sorted by their current board index (top-left first)
    ///
    /// Cells no longer on the board are skipped.
    pub fn board_order(&self, board: &Board) -> Vec<CellId> {
        let mut placed: Vec<(usize, CellId)> = self
            .cells
            .iter()
            .filter_map(|&id| board.index_of(id).map(|i| (i, id)))
            .collect();
        placed.sort_unstable_by_key(|&(i, _)| i);
        placed.into_iter().map(|(_, id)| id).collect()
    }
}

/// Walk from `start` towards `dir`, collecting cells that join a run of `kind`
fn seek(board: &Board, start: usize, dir: Direction, kind: TileKind) -> Vec<CellId> {
    let geometry = board.geometry();
    let mut run = Vec::new();
    let mut index = start;

    while let Some(next) = geometry.neighbor(index, dir) {
        let cell = board.cell(next);
        if !cell.joins(kind) {
            break;
        }
        run.push(cell.id);
        index = next;
    }

    run
}

/// Scan around the cell at `index` for a run of at least [`MIN_RUN`] on either axis
///
/// A matched seed is inert and never produces a match.
pub fn try_capture_match(board: &Board, index: usize) -> Option<Match> {
    let seed = board.get(index)?;
    if seed.matched {
        return None;
    }

    let [left, up, right, down] =
        Direction::ALL.map(|dir| seek(board, index, dir, seed.kind));

    let row: Vec<CellId> = left
        .into_iter()
        .rev()
        .chain(std::iter::once(seed.id))
        .chain(right)
        .collect();
    let column: Vec<CellId> = up
        .into_iter()
        .rev()
        .chain(std::iter::once(seed.id))
        .chain(down)
        .collect();

    if row.len() >= MIN_RUN || column.len() >= MIN_RUN {
        Some(Match {
            seed: seed.id,
            row,
            column,
        })
    } else {
        None
    }
}

/// Scan a batch of candidate seeds
///
/// A candidate already cleared by an earlier match in the same batch is skipped, so
/// overlapping runs are reported once. A candidate sitting on a short stub is still
/// scanned, its own run may qualify. Unknown ids are ignored.
pub fn find_all_matches(
    board: &Board,
    candidates: impl IntoIterator<Item = CellId>,
) -> Option<MatchSet> {
    let mut seen: HashSet<CellId> = HashSet::new();
    let mut matches = Vec::new();

    for id in candidates {
        if seen.contains(&id) {
            continue;
        }
        let Some(index) = board.index_of(id) else {
            continue;
        };
        if let Some(m) = try_capture_match(board, index) {
            seen.extend(m.cells());
            matches.push(m);
        }
    }

    MatchSet::from_matches(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_not_a_match() {
        let board = Board::from_rows(3, &[&[1, 1, 2], &[2, 3, 3], &[3, 2, 1]]);
        for i in 0..board.len() {
            assert_eq!(try_capture_match(&board, i), None, "index {}", i);
        }
    }

    #[test]
    fn test_row_run_of_three_from_any_member() {
        let board = Board::from_rows(3, &[&[2, 2, 2], &[1, 3, 1], &[3, 1, 3]]);
        for i in 0..3 {
            let m = try_capture_match(&board, i).expect("row match");
            assert_eq!(m.row, vec![0, 1, 2]);
            assert_eq!(m.column.len(), 1);
            assert_eq!(m.qualifying_axes(), 1);
        }
    }

    #[test]
    fn test_cross_match_counts_both_axes() {
        let board = Board::from_rows(
            3,
            &[&[1, 2, 1], &[2, 2, 2], &[1, 2, 3]],
        );
        let m = try_capture_match(&board, 4).expect("cross");
        assert_eq!(m.row, vec![3, 4, 5]);
        assert_eq!(m.column, vec![1, 4, 7]);
        assert_eq!(m.qualifying_axes(), 2);
        assert_eq!(m.cell_count(), 5);
        assert_eq!(m.cells().count(), 5);
    }

    #[test]
    fn test_short_side_stub_is_not_cleared() {
        // 1 2 3
        // 2 2 2
        // 3 1 3
        let board = Board::from_rows(3, &[&[1, 2, 3], &[2, 2, 2], &[3, 1, 3]]);
        let m = try_capture_match(&board, 4).expect("row match");
        assert_eq!(m.column, vec![1, 4]);
        assert_eq!(m.cells().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(m.cell_count(), 3);

        let set = find_all_matches(&board, [4, 1]).expect("set");
        assert_eq!(set.cells(), &[3, 4, 5]);
        assert_eq!(set.matches().len(), 1);
    }

    #[test]
    fn test_stub_cell_can_seed_its_own_run() {
        // 2 2 2
        // 2 2 2
        // 1 3 1
        let board = Board::from_rows(3, &[&[2, 2, 2], &[2, 2, 2], &[1, 3, 1]]);
        let set = find_all_matches(&board, [4, 1]).expect("set");
        assert_eq!(set.matches().len(), 2);
        assert_eq!(set.qualifying_axes(), 2);
        assert_eq!(set.board_order(&board), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_column_match_ignores_row_stub() {
        // 3 1 2
        // 1 1 3
        // 2 1 3
        let board = Board::from_rows(3, &[&[3, 1, 2], &[1, 1, 3], &[2, 1, 3]]);
        let m = try_capture_match(&board, 4).expect("column match");
        assert_eq!(m.row, vec![3, 4]);
        assert_eq!(m.cells().collect::<Vec<_>>(), vec![1, 4, 7]);
        assert_eq!(m.cell_count(), 3);
    }

    #[test]
    fn test_matched_cells_end_a_run() {
        let mut board = Board::from_rows(3, &[&[1, 1, 1, 1], &[2, 3, 2, 3]]);
        let id = board.cell(1).id;
        board.mark_matched([id]);
        // Row is now 1 (x) 1 1: index 2 sees only itself and 3.
        assert_eq!(try_capture_match(&board, 2), None);
        assert_eq!(try_capture_match(&board, 1), None);
    }

    #[test]
    fn test_find_all_matches_dedups_overlaps() {
        let board = Board::from_rows(3, &[&[1, 1, 1], &[2, 3, 2], &[3, 2, 3]]);
        let set = find_all_matches(&board, [0, 1, 2]).expect("set");
        assert_eq!(set.matches().len(), 1);
        assert_eq!(set.source(), MatchSource::Single);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_find_all_matches_combines_separate_seeds() {
        let board = Board::from_rows(
            3,
            &[&[1, 1, 1], &[2, 3, 2], &[3, 3, 3]],
        );
        let set = find_all_matches(&board, [6, 0]).expect("set");
        assert_eq!(set.source(), MatchSource::Combo);
        assert_eq!(set.qualifying_axes(), 2);
        assert_eq!(set.board_order(&board), vec![0, 1, 2, 6, 7, 8]);
    }
}
