//! Timing for the presentation pauses between turn phases
//!
//! The arena awaits a [`Clock`] between phases so a renderer can show each step.
//! [`TokioClock`] sleeps on the tokio timer; [`InstantClock`] returns at once for
//! headless play and tests.

use std::future::Future;
use std::time::Duration;

pub trait Clock {
    fn delay(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Sleeps on the tokio timer (pauses with `tokio::time::pause`)
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn delay(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// Never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantClock;

impl Clock for InstantClock {
    fn delay(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}
