//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, orchestration, rendering adapters).
//!
//! # Board Layout
//!
//! The board is a flat, row-major array of `rows * cols` cells:
//!
//! - **Index**: `i = row * cols + col` (0-based)
//! - **Stride**: stepping up/down moves by `cols`
//! - **Default size**: 7 x 7 with 7 tile kinds
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BAD_SWAP_DELAY_MS` | 500 | How long an illegal swap stays visible before it is undone |
//! | `PHASE_DELAY_MS` | 200 | Pause between cascade phases (mark, collapse, refill) |
//!
//! # Examples
//!
//! ```
//! use tile_cascade_types::{Direction, InitialPassRule, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! let rule = InitialPassRule::from_str("compound").unwrap();
//! assert_eq!(rule, InitialPassRule::Compound);
//!
//! assert_eq!(DEFAULT_ROWS, 7);
//! assert_eq!(DEFAULT_COLS, 7);
//! ```

/// Tile kind (visual/equality class), valid values are `1..=tile_kinds`
pub type TileKind = u8;

/// Default board rows
pub const DEFAULT_ROWS: usize = 7;

/// Default board columns
pub const DEFAULT_COLS: usize = 7;

/// Default number of distinct tile kinds
pub const DEFAULT_TILE_KINDS: TileKind = 7;

/// Shortest same-kind run that counts as a match
pub const MIN_RUN: usize = 3;

/// Delay before an illegal swap is reverted (500ms)
pub const BAD_SWAP_DELAY_MS: u64 = 500;

/// Delay between cascade phases (200ms)
pub const PHASE_DELAY_MS: u64 = 200;

/// Default generator seed
pub const DEFAULT_SEED: u32 = 1;


/// The four orthogonal directions on the board
///
/// The declaration order (`Left`, `Up`, `Right`, `Down`) is the scan order used by
/// match finding and is also the index into direction lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions in scan order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// The reverse direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_cascade_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// The two directions at right angles to this one
    pub fn perpendicular(&self) -> [Direction; 2] {
        match self.axis() {
            Axis::Row => [Direction::Up, Direction::Down],
            Axis::Column => [Direction::Left, Direction::Right],
        }
    }

    /// The axis this direction travels along
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Row,
            Direction::Up | Direction::Down => Axis::Column,
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Board axis
///
/// - **Row**: horizontal runs (left/right)
/// - **Column**: vertical runs (up/down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// How the user-triggered (first) pass of a cascade contributes to the combo count
///
/// Later passes always contribute one point per qualifying axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialPassRule {
    /// Every qualifying axis counts, even a plain 3-in-a-row
    Always,
    /// Counts only when the pass has more than one qualifying axis or more than one match
    #[default]
    Compound,
    /// The first pass never counts
    Never,
}

impl InitialPassRule {
    /// Parse rule from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "always" => Some(InitialPassRule::Always),
            "compound" => Some(InitialPassRule::Compound),
            "never" => Some(InitialPassRule::Never),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InitialPassRule::Always => "always",
            InitialPassRule::Compound => "compound",
            InitialPassRule::Never => "never",
        }
    }
}

/// What the picker does when the second pick is neither the first pick,
/// the same kind, nor adjacent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrongPickPolicy {
    /// Drop the selection and make the clicked tile the new first pick
    #[default]
    Repick,
    /// Drop the selection and ignore the click
    Ignore,
}

impl WrongPickPolicy {
    /// Parse policy from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "repick" => Some(WrongPickPolicy::Repick),
            "ignore" => Some(WrongPickPolicy::Ignore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WrongPickPolicy::Repick => "repick",
            WrongPickPolicy::Ignore => "ignore",
        }
    }
}
