//! RNG module - tile kind generation
//!
//! Refill and board creation draw tile kinds through [`TileGenerator`].
//! [`SimpleRng`] is a seeded LCG so whole sessions replay from a seed;
//! [`ScriptedTiles`] replays a fixed list for tests.

use crate::types::TileKind;

/// Produces the kind of each freshly created cell
pub trait TileGenerator {
    /// Next kind in `1..=tile_kinds`
    fn next_kind(&mut self, tile_kinds: TileKind) -> TileKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; draw from the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileGenerator for SimpleRng {
    fn next_kind(&mut self, tile_kinds: TileKind) -> TileKind {
        1 + self.next_range(tile_kinds as u32) as TileKind
    }
}

/// Replays a fixed sequence of kinds, cycling when exhausted
///
/// Values outside `1..=tile_kinds` are folded back into range.
#[derive(Debug, Clone)]
pub struct ScriptedTiles {
    script: Vec<TileKind>,
    cursor: usize,
}

impl ScriptedTiles {
    pub fn new(script: impl Into<Vec<TileKind>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of kinds handed out so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl TileGenerator for ScriptedTiles {
    fn next_kind(&mut self, tile_kinds: TileKind) -> TileKind {
        let max = tile_kinds.max(1);
        if self.script.is_empty() {
            return 1;
        }
        let raw = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        (raw.max(1) - 1) % max + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_rng_kinds_in_range_and_all_seen() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 8];
        for _ in 0..1000 {
            let kind = rng.next_kind(7);
            assert!((1..=7).contains(&kind), "kind {} out of range", kind);
            seen[kind as usize] = true;
        }
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_tiles_cycle_and_fold() {
        let mut tiles = ScriptedTiles::new(vec![1, 2, 9]);
        assert_eq!(tiles.next_kind(3), 1);
        assert_eq!(tiles.next_kind(3), 2);
        // 9 folds into 1..=3
        assert_eq!(tiles.next_kind(3), 3);
        assert_eq!(tiles.next_kind(3), 1);
        assert_eq!(tiles.drawn(), 4);
    }
}
