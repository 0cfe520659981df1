//! Math Quest - story-game battle mini-games and math input helpers.
//!
//! This module exposes the engine and helpers for the binaries, tests and
//! any host that embeds the battles.

pub mod battle;
pub mod constants;
pub mod error;
pub mod math;
pub mod session;
pub mod simulator;

pub use error::{QuestError, Result};

/// Install the stderr log subscriber. Honors `RUST_LOG`, defaults to `warn`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // A second call (tests, embedding hosts) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
