//! Geometry module - index arithmetic over the flat board array
//!
//! Cells live in a flat, row-major array: `i = row * cols + col`.
//! Horizontal steps move by 1, vertical steps move by `cols`.
//! Nothing here checks bounds on steps; callers test the edge first.

use crate::types::Direction;

type EdgeFn = fn(&Geometry, usize) -> bool;
type StepFn = fn(&Geometry, usize) -> usize;

/// (edge test, step) pairs indexed by `Direction as usize`
const SEEK_TABLE: [(EdgeFn, StepFn); 4] = [
    (Geometry::is_left_edge, Geometry::left_of),
    (Geometry::is_top_edge, Geometry::up_of),
    (Geometry::is_right_edge, Geometry::right_of),
    (Geometry::is_bottom_edge, Geometry::down_of),
];

/// Board dimensions with pure neighbor/edge helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    rows: usize,
    cols: usize,
}

impl Geometry {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Flat index from (row, col)
    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline(always)]
    pub fn row_of(&self, index: usize) -> usize {
        index / self.cols
    }

    #[inline(always)]
    pub fn col_of(&self, index: usize) -> usize {
        index % self.cols
    }

    #[inline(always)]
    pub fn left_of(&self, index: usize) -> usize {
        index - 1
    }

    #[inline(always)]
    pub fn right_of(&self, index: usize) -> usize {
        index + 1
    }

    #[inline(always)]
    pub fn up_of(&self, index: usize) -> usize {
        index - self.cols
    }

    #[inline(always)]
    pub fn down_of(&self, index: usize) -> usize {
        index + self.cols
    }

    pub fn is_left_edge(&self, index: usize) -> bool {
        index % self.cols == 0
    }

    pub fn is_right_edge(&self, index: usize) -> bool {
        (index + 1) % self.cols == 0
    }

    pub fn is_top_edge(&self, index: usize) -> bool {
        index < self.cols
    }

    pub fn is_bottom_edge(&self, index: usize) -> bool {
        index >= self.len() - self.cols
    }

    /// Whether `index` sits on the board edge facing `dir`
    pub fn is_edge(&self, index: usize, dir: Direction) -> bool {
        (SEEK_TABLE[dir as usize].0)(self, index)
    }

    /// Step one cell towards `dir` without an edge check
    pub fn step(&self, index: usize, dir: Direction) -> usize {
        (SEEK_TABLE[dir as usize].1)(self, index)
    }

    /// Neighbor towards `dir`, or None when `index` is on that edge
    pub fn neighbor(&self, index: usize, dir: Direction) -> Option<usize> {
        if self.is_edge(index, dir) {
            None
        } else {
            Some(self.step(index, dir))
        }
    }

    /// Direction leading from `from` to an orthogonally adjacent `to`
    ///
    /// Returns None for the same index, diagonals, row wrap-arounds and
    /// anything further away than one step.
    pub fn direction_between(&self, from: usize, to: usize) -> Option<Direction> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        Direction::ALL
            .into_iter()
            .find(|&dir| self.neighbor(from, dir) == Some(to))
    }

    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.direction_between(a, b).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_stride_is_cols() {
        // 3 rows x 5 cols
        let g = Geometry::new(3, 5);
        assert_eq!(g.down_of(2), 7);
        assert_eq!(g.up_of(7), 2);
        assert_eq!(g.index(2, 4), 14);
        assert_eq!(g.row_of(14), 2);
        assert_eq!(g.col_of(14), 4);
    }

    #[test]
    fn test_edges_non_square() {
        let g = Geometry::new(4, 2);
        assert!(g.is_left_edge(0));
        assert!(g.is_right_edge(1));
        assert!(g.is_left_edge(6));
        assert!(!g.is_right_edge(6));
        assert!(g.is_top_edge(1));
        assert!(!g.is_top_edge(2));
        assert!(g.is_bottom_edge(6));
        assert!(g.is_bottom_edge(7));
        assert!(!g.is_bottom_edge(5));
    }

    #[test]
    fn test_neighbor_respects_edges() {
        let g = Geometry::new(3, 3);
        assert_eq!(g.neighbor(0, Direction::Left), None);
        assert_eq!(g.neighbor(0, Direction::Up), None);
        assert_eq!(g.neighbor(0, Direction::Right), Some(1));
        assert_eq!(g.neighbor(0, Direction::Down), Some(3));
        assert_eq!(g.neighbor(8, Direction::Right), None);
        assert_eq!(g.neighbor(8, Direction::Down), None);
    }

    #[test]
    fn test_direction_between_rejects_wraps_and_diagonals() {
        let g = Geometry::new(3, 3);
        assert_eq!(g.direction_between(4, 3), Some(Direction::Left));
        assert_eq!(g.direction_between(4, 1), Some(Direction::Up));
        assert_eq!(g.direction_between(4, 5), Some(Direction::Right));
        assert_eq!(g.direction_between(4, 7), Some(Direction::Down));
        // Row wrap: index 2 and 3 differ by one but are on different rows.
        assert_eq!(g.direction_between(2, 3), None);
        assert_eq!(g.direction_between(4, 4), None);
        assert_eq!(g.direction_between(0, 4), None);
        assert_eq!(g.direction_between(0, 9), None);
    }
}
