//! Arena configuration
//!
//! Defaults match the classic 7x7 board. Every field can be overridden from the
//! environment; values that fail to parse fall back to the default.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::types::{
    InitialPassRule, TileKind, WrongPickPolicy, BAD_SWAP_DELAY_MS, DEFAULT_COLS, DEFAULT_ROWS,
    DEFAULT_SEED, DEFAULT_TILE_KINDS, PHASE_DELAY_MS,
};

/// Arena configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    pub rows: usize,
    pub cols: usize,
    pub tile_kinds: TileKind,
    pub seed: u32,
    pub bad_swap_delay_ms: u64,
    pub phase_delay_ms: u64,
    pub initial_pass: InitialPassRule,
    pub wrong_pick: WrongPickPolicy,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tile_kinds: DEFAULT_TILE_KINDS,
            seed: DEFAULT_SEED,
            bad_swap_delay_ms: BAD_SWAP_DELAY_MS,
            phase_delay_ms: PHASE_DELAY_MS,
            initial_pass: InitialPassRule::default(),
            wrong_pick: WrongPickPolicy::default(),
        }
    }
}

impl ArenaConfig {
    /// Load configuration from environment variables
    ///
    /// - `TILE_CASCADE_ROWS`, `TILE_CASCADE_COLS`, `TILE_CASCADE_KINDS`
    /// - `TILE_CASCADE_SEED`
    /// - `TILE_CASCADE_BAD_SWAP_MS`, `TILE_CASCADE_PHASE_MS`
    /// - `TILE_CASCADE_INITIAL_PASS` (`always`, `compound`, `never`)
    /// - `TILE_CASCADE_WRONG_PICK` (`repick`, `ignore`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            rows: parse_var(&lookup, "TILE_CASCADE_ROWS").unwrap_or(defaults.rows),
            cols: parse_var(&lookup, "TILE_CASCADE_COLS").unwrap_or(defaults.cols),
            tile_kinds: parse_var(&lookup, "TILE_CASCADE_KINDS").unwrap_or(defaults.tile_kinds),
            seed: parse_var(&lookup, "TILE_CASCADE_SEED").unwrap_or(defaults.seed),
            bad_swap_delay_ms: parse_var(&lookup, "TILE_CASCADE_BAD_SWAP_MS")
                .unwrap_or(defaults.bad_swap_delay_ms),
            phase_delay_ms: parse_var(&lookup, "TILE_CASCADE_PHASE_MS")
                .unwrap_or(defaults.phase_delay_ms),
            initial_pass: lookup("TILE_CASCADE_INITIAL_PASS")
                .and_then(|s| InitialPassRule::from_str(s.trim()))
                .unwrap_or(defaults.initial_pass),
            wrong_pick: lookup("TILE_CASCADE_WRONG_PICK")
                .and_then(|s| WrongPickPolicy::from_str(s.trim()))
                .unwrap_or(defaults.wrong_pick),
        }
    }

    pub fn bad_swap_delay(&self) -> Duration {
        Duration::from_millis(self.bad_swap_delay_ms)
    }

    pub fn phase_delay(&self) -> Duration {
        Duration::from_millis(self.phase_delay_ms)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ArenaConfig::default();
        assert_eq!((config.rows, config.cols, config.tile_kinds), (7, 7, 7));
        assert_eq!(config.bad_swap_delay(), Duration::from_millis(500));
        assert_eq!(config.phase_delay(), Duration::from_millis(200));
        assert_eq!(config.initial_pass, InitialPassRule::Compound);
        assert_eq!(config.wrong_pick, WrongPickPolicy::Repick);
    }

    #[test]
    fn test_from_lookup_overrides_and_fallbacks() {
        let vars: HashMap<&str, &str> = [
            ("TILE_CASCADE_ROWS", "5"),
            ("TILE_CASCADE_COLS", "nine"),
            ("TILE_CASCADE_KINDS", "4"),
            ("TILE_CASCADE_BAD_SWAP_MS", "-3"),
            ("TILE_CASCADE_SEED", " 42 "),
            ("TILE_CASCADE_PHASE_MS", "0"),
            ("TILE_CASCADE_INITIAL_PASS", "Always"),
            ("TILE_CASCADE_WRONG_PICK", "sometimes"),
        ]
        .into_iter()
        .collect();

        let config = ArenaConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.tile_kinds, 4);
        assert_eq!(config.seed, 42);
        assert_eq!(config.phase_delay_ms, 0);
        assert_eq!(config.bad_swap_delay_ms, BAD_SWAP_DELAY_MS);
        assert_eq!(config.initial_pass, InitialPassRule::Always);
        assert_eq!(config.wrong_pick, WrongPickPolicy::Repick);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = ArenaConfig::from_env();
    }
}
