//! Board module - owns the cells and the cell <-> index mapping
//!
//! The board is a fixed-size flat array of `rows * cols` cells in row-major order.
//! Cells are never removed: a cleared cell stays in place flagged `matched` until the
//! refill step replaces it with a freshly created cell.
//!
//! Every cell carries a stable [`CellId`]. Matches, picks and collapse results refer
//! to ids, and the board answers where an id currently sits. Only the mover changes
//! which id lives at which index.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::BoardError;
use crate::geometry::Geometry;
use crate::rng::TileGenerator;
use crate::types::TileKind;

/// Stable identity of a cell for its whole lifetime on the board
pub type CellId = u32;

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub id: CellId,
    pub kind: TileKind,
    /// Queued for clearing; inert for matching, a hole for falling.
    pub matched: bool,
    /// Moved during the current collapse pass.
    pub collapsed: bool,
}

impl Cell {
    pub fn new(id: CellId, kind: TileKind) -> Self {
        Self {
            id,
            kind,
            matched: false,
            collapsed: false,
        }
    }

    /// Whether this cell can join a run of `kind`
    #[inline(always)]
    pub fn joins(&self, kind: TileKind) -> bool {
        !self.matched && self.kind == kind
    }
}

/// The game board
#[derive(Debug, Clone)]
pub struct Board {
    geometry: Geometry,
    tile_kinds: TileKind,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
    positions: HashMap<CellId, usize>,
    next_id: CellId,
}

impl Board {
    /// Create a board of freshly generated cells
    pub fn generate<G: TileGenerator + ?Sized>(
        rows: usize,
        cols: usize,
        tile_kinds: TileKind,
        generator: &mut G,
    ) -> Result<Self, BoardError> {
        let geometry = Self::checked_geometry(rows, cols, tile_kinds)?;
        let kinds: Vec<TileKind> = (0..geometry.len())
            .map(|_| generator.next_kind(tile_kinds))
            .collect();
        Ok(Self::assemble(geometry, tile_kinds, &kinds))
    }

    /// Create a board from an explicit row-major layout
    pub fn from_kinds(
        rows: usize,
        cols: usize,
        tile_kinds: TileKind,
        layout: &[TileKind],
    ) -> Result<Self, BoardError> {
        let geometry = Self::checked_geometry(rows, cols, tile_kinds)?;
        if layout.len() != geometry.len() {
            return Err(BoardError::LayoutSize {
                expected: geometry.len(),
                actual: layout.len(),
            });
        }
        if let Some((index, &kind)) = layout
            .iter()
            .enumerate()
            .find(|(_, &kind)| kind == 0 || kind > tile_kinds)
        {
            return Err(BoardError::KindOutOfRange {
                index,
                kind,
                max: tile_kinds,
            });
        }
        Ok(Self::assemble(geometry, tile_kinds, layout))
    }

    fn checked_geometry(
        rows: usize,
        cols: usize,
        tile_kinds: TileKind,
    ) -> Result<Geometry, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyDimensions { rows, cols });
        }
        if tile_kinds == 0 {
            return Err(BoardError::NoTileKinds);
        }
        Ok(Geometry::new(rows, cols))
    }

    fn assemble(geometry: Geometry, tile_kinds: TileKind, kinds: &[TileKind]) -> Self {
        let cells: Vec<Cell> = kinds
            .iter()
            .enumerate()
            .map(|(i, &kind)| Cell::new(i as CellId, kind))
            .collect();
        let positions = cells.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        Self {
            geometry,
            tile_kinds,
            next_id: cells.len() as CellId,
            cells,
            positions,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn rows(&self) -> usize {
        self.geometry.rows()
    }

    pub fn cols(&self) -> usize {
        self.geometry.cols()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of distinct tile kinds (K)
    pub fn tile_kinds(&self) -> TileKind {
        self.tile_kinds
    }

    /// Get the cell at `index`, None if out of bounds
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Get the cell at an index known to be on the board
    ///
    /// Panics on an out-of-bounds index, like slice indexing.
    #[inline(always)]
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Current index of a cell
    pub fn index_of(&self, id: CellId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn cell_by_id(&self, id: CellId) -> Option<&Cell> {
        self.index_of(id).map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Tile kinds in board order
    pub fn kinds(&self) -> Vec<TileKind> {
        self.cells.iter().map(|c| c.kind).collect()
    }

    /// Exchange the cells at two indices and keep the id mapping in step
    pub(crate) fn swap_indices(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
        self.positions.insert(self.cells[a].id, a);
        self.positions.insert(self.cells[b].id, b);
    }

    /// Flag cells as matched; returns how many were newly flagged
    pub fn mark_matched(&mut self, ids: impl IntoIterator<Item = CellId>) -> usize {
        let mut flagged = 0;
        for id in ids {
            if let Some(&i) = self.positions.get(&id) {
                if !self.cells[i].matched {
                    self.cells[i].matched = true;
                    flagged += 1;
                }
            }
        }
        flagged
    }

    pub(crate) fn set_collapsed(&mut self, id: CellId) {
        if let Some(&i) = self.positions.get(&id) {
            self.cells[i].collapsed = true;
        }
    }

    /// Drop the per-pass collapse markers
    pub fn clear_collapsed(&mut self) {
        for cell in &mut self.cells {
            cell.collapsed = false;
        }
    }

    /// Indices still holding matched cells, ascending
    pub fn holes(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.matched)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_holes(&self) -> bool {
        self.cells.iter().any(|c| c.matched)
    }

    /// Replace the cell at `index` with a brand-new cell of `kind`
    ///
    /// The old id leaves the board; the new cell gets the next free id.
    pub fn create_cell(&mut self, kind: TileKind, index: usize) -> CellId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let old = self.cells[index].id;
        self.positions.remove(&old);
        self.cells[index] = Cell::new(id, kind);
        self.positions.insert(id, index);
        id
    }

    /// Replace every matched cell with a freshly generated one
    ///
    /// Returns the new ids in board order.
    pub fn refill_holes<G: TileGenerator + ?Sized>(&mut self, generator: &mut G) -> Vec<CellId> {
        self.holes()
            .into_iter()
            .map(|index| {
                let kind = generator.next_kind(self.tile_kinds);
                self.create_cell(kind, index)
            })
            .collect()
    }

    /// Create from a 2D layout for testing
    #[cfg(test)]
    pub fn from_rows(tile_kinds: TileKind, rows_2d: &[&[TileKind]]) -> Self {
        let rows = rows_2d.len();
        let cols = rows_2d[0].len();
        assert!(rows_2d.iter().all(|r| r.len() == cols));
        let flat: Vec<TileKind> = rows_2d.iter().flat_map(|r| r.iter().copied()).collect();
        Self::from_kinds(rows, cols, tile_kinds, &flat).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedTiles;

    #[test]
    fn test_from_kinds_assigns_ids_in_board_order() {
        let board = Board::from_kinds(2, 3, 3, &[1, 2, 3, 3, 2, 1]).unwrap();
        assert_eq!(board.len(), 6);
        for (i, cell) in board.cells().iter().enumerate() {
            assert_eq!(cell.id, i as CellId);
            assert_eq!(board.index_of(cell.id), Some(i));
            assert!(!cell.matched);
            assert!(!cell.collapsed);
        }
        assert_eq!(board.kinds(), vec![1, 2, 3, 3, 2, 1]);
    }

    #[test]
    fn test_from_kinds_validation() {
        assert_eq!(
            Board::from_kinds(0, 3, 3, &[]).unwrap_err(),
            BoardError::EmptyDimensions { rows: 0, cols: 3 }
        );
        assert_eq!(
            Board::from_kinds(1, 2, 0, &[1, 1]).unwrap_err(),
            BoardError::NoTileKinds
        );
        assert_eq!(
            Board::from_kinds(1, 2, 3, &[1]).unwrap_err(),
            BoardError::LayoutSize {
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(
            Board::from_kinds(1, 2, 3, &[1, 4]).unwrap_err(),
            BoardError::KindOutOfRange {
                index: 1,
                kind: 4,
                max: 3
            }
        );
    }

    #[test]
    fn test_swap_indices_keeps_mapping() {
        let mut board = Board::from_rows(3, &[&[1, 2], &[3, 1]]);
        let a = board.cell(0).id;
        let b = board.cell(3).id;
        board.swap_indices(0, 3);
        assert_eq!(board.index_of(a), Some(3));
        assert_eq!(board.index_of(b), Some(0));
        assert_eq!(board.kinds(), vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_refill_replaces_only_holes_with_new_ids() {
        let mut board = Board::from_rows(3, &[&[1, 2, 3], &[3, 2, 1]]);
        let old = board.cell(1).id;
        assert_eq!(board.mark_matched([old, old]), 1);
        assert_eq!(board.holes(), vec![1]);

        let mut gen = ScriptedTiles::new(vec![3]);
        let fresh = board.refill_holes(&mut gen);

        assert_eq!(fresh.len(), 1);
        assert_ne!(fresh[0], old);
        assert_eq!(board.index_of(fresh[0]), Some(1));
        assert_eq!(board.index_of(old), None);
        assert_eq!(board.cell(1).kind, 3);
        assert!(!board.has_holes());
        assert_eq!(board.len(), 6);
    }
}
