//! Turn orchestration for tile-cascade
//!
//! The core crate knows the rules; this crate sequences them over time. The
//! [`Arena`] owns the board between turns, paces each phase through a [`Clock`],
//! rejects input while a turn resolves, and reports to a [`StatisticsSink`] and a
//! [`GameOverSink`].
//!
//! # Example
//!
//! ```
//! use tile_cascade_engine::{
//!     Arena, ArenaConfig, ChanceReport, InstantClock, SimpleRng, Statistics, TurnOutcome,
//! };
//!
//! let arena = Arena::new(
//!     ArenaConfig::default(),
//!     SimpleRng::new(7),
//!     InstantClock,
//!     Statistics::default(),
//!     |_: &ChanceReport| true,
//! )
//! .unwrap();
//!
//! tokio_test::block_on(async {
//!     if let Some(outcome) = arena.play_hint().await.unwrap() {
//!         assert!(matches!(outcome, TurnOutcome::Resolved(_)));
//!     }
//! });
//! assert!(!arena.is_locked());
//! ```

pub mod arena;
pub mod clock;
pub mod config;
pub mod error;
pub mod sinks;

pub use tile_cascade_core as core;
pub use tile_cascade_types as types;

pub use arena::{Arena, PassReport, PassTrigger, Settlement, TurnOutcome, TurnReport};
pub use clock::{Clock, InstantClock, TokioClock};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use sinks::{GameOverSink, Statistics, StatisticsSink, StatsUpdate};

pub use tile_cascade_core::{ChanceReport, ScriptedTiles, SimpleRng};
