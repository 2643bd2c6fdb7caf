//! Moodwave - headless core of a music-streaming client mockup.
//!
//! Provides the resizable sidebar layout engine, a simulated playback
//! progress model, the mood playlist flow and best-effort artwork
//! enrichment, exercised from the command line.

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod layout;
pub mod model;
pub mod playback;
#[cfg(test)]
pub mod test_utils;
pub mod view;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; RUST_LOG overrides the default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodwave=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run_command(&args)
}
