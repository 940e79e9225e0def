//! Headless tile-cascade runner (default binary).
//!
//! Plays a session by taking the first swap hint each move and prints a JSON report.
//!
//! ```text
//! tile-cascade [--moves N] [--seed S] [--instant]
//! ```
//!
//! Board settings come from `TILE_CASCADE_*` environment variables; log verbosity
//! from `RUST_LOG` (default `info`).

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tile_cascade::autoplay::{parse_autoplay_args, run_session};
use tile_cascade::engine::{ArenaConfig, InstantClock, TokioClock};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let autoplay = parse_autoplay_args(&args)?;

    let mut config = ArenaConfig::from_env();
    if let Some(seed) = autoplay.seed {
        config.seed = seed;
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let report = rt.block_on(async {
        if autoplay.instant {
            run_session(config, autoplay.moves, InstantClock).await
        } else {
            run_session(config, autoplay.moves, TokioClock).await
        }
    })?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    eprintln!("{}", report.board);
    Ok(())
}
