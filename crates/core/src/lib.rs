//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the board model and every rule of the tile-matching game. It has
//! **no dependencies** on timing, async runtimes or I/O, making it:
//!
//! - **Deterministic**: the same generator seed produces the same boards
//! - **Testable**: every rule is a plain function over a [`Board`]
//! - **Portable**: usable from the async engine, benchmarks or a headless tool
//!
//! # Module Structure
//!
//! - [`geometry`]: index arithmetic and edge tests for a `rows x cols` grid
//! - [`board`]: cells, stable cell ids and the id <-> index mapping
//! - [`rng`]: tile kind generators (seeded LCG, scripted)
//! - [`matcher`]: same-kind run detection around seed cells
//! - [`chance`]: counting the swaps that would create a match, with hints
//! - [`picker`]: two-slot tile selection producing swap requests
//! - [`mover`]: swaps and the collapse pass
//! - [`scoring`]: combo accounting across cascade passes
//! - [`snapshot`]: serializable board view
//!
//! # Game Rules
//!
//! - **Swap**: only orthogonally adjacent tiles of different kinds can be swapped
//! - **Match**: three or more same-kind tiles in a row or column
//! - **Collapse**: matched tiles bubble to the top, the tiles above fall into place
//! - **Refill**: holes left at the top receive freshly generated tiles
//! - **Cascade**: falling and fresh tiles are re-checked until nothing matches
//! - **Stalemate**: no single swap can produce a match
//!
//! # Example
//!
//! ```
//! use tile_cascade_core::{chance, find_all_matches, mover, Board};
//!
//! // 1 1 2
//! // 2 3 1
//! // 3 2 3
//! let mut board = Board::from_kinds(3, 3, 3, &[1, 1, 2, 2, 3, 1, 3, 2, 3]).unwrap();
//! assert!(find_all_matches(&board, board.cells().iter().map(|c| c.id)).is_none());
//!
//! let hint = chance::first_hint(&board).unwrap();
//! let (a, b) = (board.cell(hint.from).id, board.cell(hint.to).id);
//! mover::swap(&mut board, a, b).unwrap();
//! assert!(find_all_matches(&board, [a, b]).is_some());
//! ```

pub mod board;
pub mod chance;
pub mod error;
pub mod geometry;
pub mod matcher;
pub mod mover;
pub mod picker;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tile_cascade_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, CellId};
pub use chance::{analyze, count_chances, ChanceReport, SwapHint};
pub use error::BoardError;
pub use geometry::Geometry;
pub use matcher::{find_all_matches, try_capture_match, Match, MatchSet, MatchSource};
pub use mover::{collapse, Collapse};
pub use picker::{PickState, TilePicker};
pub use rng::{ScriptedTiles, SimpleRng, TileGenerator};
pub use scoring::{pass_combo_points, TurnTally};
pub use snapshot::BoardSnapshot;
