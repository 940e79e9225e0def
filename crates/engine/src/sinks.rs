//! Outbound collaborators of the arena
//!
//! Both sinks are write-only: nothing they do feeds back into the rules, except that
//! a game-over sink may ask for a fresh board.

use serde::Serialize;

use crate::core::ChanceReport;

/// One statistics update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatsUpdate {
    /// A swap was executed (kept or reverted)
    Move,
    /// Cells cleared by one cascade pass
    Matched(u32),
    /// Combo points earned by one cascade pass
    Combo(u32),
    /// Chances available after a turn settled
    Chances(u32),
    /// A new game started
    Reset,
}

pub trait StatisticsSink {
    fn record(&mut self, update: StatsUpdate);
}

/// Running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Statistics {
    pub moves: u32,
    pub matched: u32,
    pub combos: u32,
    /// Latest chance count (replaced, not summed)
    pub chances: u32,
}

impl StatisticsSink for Statistics {
    fn record(&mut self, update: StatsUpdate) {
        match update {
            StatsUpdate::Move => self.moves += 1,
            StatsUpdate::Matched(n) => self.matched += n,
            StatsUpdate::Combo(n) => self.combos += n,
            StatsUpdate::Chances(n) => self.chances = n,
            StatsUpdate::Reset => *self = Self::default(),
        }
    }
}

/// Keeps every update in order
impl StatisticsSink for Vec<StatsUpdate> {
    fn record(&mut self, update: StatsUpdate) {
        self.push(update);
    }
}

/// Told when no swap can create a match
pub trait GameOverSink {
    /// Returns true to start a new game on a fresh board
    fn notify(&mut self, report: &ChanceReport) -> bool;
}

impl<F> GameOverSink for F
where
    F: FnMut(&ChanceReport) -> bool,
{
    fn notify(&mut self, report: &ChanceReport) -> bool {
        self(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_totals() {
        let mut stats = Statistics::default();
        for update in [
            StatsUpdate::Move,
            StatsUpdate::Move,
            StatsUpdate::Matched(3),
            StatsUpdate::Combo(1),
            StatsUpdate::Matched(4),
            StatsUpdate::Chances(5),
            StatsUpdate::Chances(2),
        ] {
            stats.record(update);
        }
        assert_eq!(
            stats,
            Statistics {
                moves: 2,
                matched: 7,
                combos: 1,
                chances: 2,
            }
        );

        stats.record(StatsUpdate::Reset);
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn test_closure_game_over_sink() {
        let mut calls = 0;
        let mut sink = |report: &ChanceReport| {
            calls += 1;
            report.is_stalemate()
        };
        assert!(sink.notify(&ChanceReport::default()));
        assert_eq!(calls, 1);
    }
}
