//! Headless autoplay: plays a session by always taking the first swap hint.

use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::info;

use crate::core::{BoardSnapshot, ChanceReport, SimpleRng};
use crate::engine::{Arena, ArenaConfig, Clock, GameOverSink, Statistics, TurnOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub moves: u32,
    /// Overrides the configured seed
    pub seed: Option<u32>,
    /// Skip the presentation delays
    pub instant: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            moves: 20,
            seed: None,
            instant: false,
        }
    }
}

pub fn parse_autoplay_args(args: &[String]) -> Result<AutoplayConfig> {
    let mut config = AutoplayConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--moves" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("autoplay: missing value for --moves"))?;
                config.moves = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("autoplay: invalid --moves value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("autoplay: missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("autoplay: invalid --seed value: {}", v))?,
                );
            }
            "--instant" => config.instant = true,
            other => {
                return Err(anyhow!("autoplay: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Fresh boards in a row without a single chance before the session gives up
pub const MAX_STALLED_GAMES: u32 = 64;

/// Always asks for a new board and counts how often it did
#[derive(Debug, Default)]
pub struct RestartCounter {
    pub restarts: u32,
}

impl GameOverSink for RestartCounter {
    fn notify(&mut self, report: &ChanceReport) -> bool {
        self.restarts += 1;
        info!(restarts = self.restarts, hints = report.hints.len(), "stalemate, restarting");
        true
    }
}

/// Summary printed at the end of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub seed: u32,
    pub moves_played: u32,
    pub cascades: u32,
    pub reverts: u32,
    pub games: u32,
    /// Totals of the game in progress
    pub statistics: Statistics,
    pub board: BoardSnapshot,
}

/// Play up to `moves` hinted swaps
pub async fn run_session<C: Clock>(
    config: ArenaConfig,
    moves: u32,
    clock: C,
) -> Result<SessionReport> {
    let seed = config.seed;
    let arena = Arena::new(
        config,
        SimpleRng::new(seed),
        clock,
        Statistics::default(),
        RestartCounter::default(),
    )?;

    let mut report = SessionReport {
        seed,
        moves_played: 0,
        cascades: 0,
        reverts: 0,
        games: 1,
        statistics: Statistics::default(),
        board: arena.snapshot(),
    };

    let mut stalled = 0u32;
    while report.moves_played < moves {
        let Some(outcome) = arena.play_hint().await? else {
            stalled += 1;
            if stalled > MAX_STALLED_GAMES {
                return Err(anyhow!(
                    "autoplay: no playable board after {} fresh games",
                    MAX_STALLED_GAMES
                ));
            }
            // The opening board can already be stuck; nothing has notified the sink yet.
            let (rows, cols, kinds) = {
                let board = arena.board();
                (board.rows(), board.cols(), board.tile_kinds())
            };
            arena.new_game(rows, cols, kinds)?;
            report.games += 1;
            continue;
        };

        stalled = 0;
        report.moves_played += 1;
        let settlement = match outcome {
            TurnOutcome::Picked(_) => continue,
            TurnOutcome::Reverted { settlement, .. } => {
                report.reverts += 1;
                settlement
            }
            TurnOutcome::Resolved(turn) => {
                report.cascades += 1;
                info!(
                    moves = report.moves_played,
                    passes = turn.passes.len(),
                    matched = turn.matched,
                    combo = turn.combo,
                    "move played"
                );
                turn.settlement
            }
        };
        if settlement.restarted {
            report.games += 1;
        }
    }

    report.statistics = *arena.stats();
    report.board = arena.snapshot();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::InstantClock;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_autoplay_args_reads_flags() {
        let cfg =
            parse_autoplay_args(&args(&["--moves", "5", "--seed", "9", "--instant"])).unwrap();
        assert_eq!(
            cfg,
            AutoplayConfig {
                moves: 5,
                seed: Some(9),
                instant: true,
            }
        );
    }

    #[test]
    fn parse_autoplay_args_uses_defaults() {
        assert_eq!(parse_autoplay_args(&[]).unwrap(), AutoplayConfig::default());
    }

    #[test]
    fn parse_autoplay_args_rejects_garbage() {
        assert!(parse_autoplay_args(&args(&["--moves"])).is_err());
        assert!(parse_autoplay_args(&args(&["--moves", "many"])).is_err());
        assert!(parse_autoplay_args(&args(&["--fast"])).is_err());
    }

    #[test]
    fn run_session_plays_every_move() {
        let report =
            tokio_test::block_on(run_session(ArenaConfig::default(), 10, InstantClock)).unwrap();
        assert_eq!(report.moves_played, 10);
        assert_eq!(report.reverts, 0);
        assert_eq!(report.cascades, 10);
        assert_eq!(report.board.tiles.len(), 49);
        assert!(report.board.matched.is_empty());
    }

    #[test]
    fn run_session_gives_up_on_unplayable_boards() {
        let config = ArenaConfig {
            rows: 3,
            cols: 3,
            tile_kinds: 1,
            ..ArenaConfig::default()
        };
        let err = tokio_test::block_on(run_session(config, 1, InstantClock)).unwrap_err();
        assert!(err.to_string().contains("no playable board"));

        let config = ArenaConfig {
            rows: 1,
            cols: 2,
            ..ArenaConfig::default()
        };
        assert!(tokio_test::block_on(run_session(config, 3, InstantClock)).is_err());
    }
}
