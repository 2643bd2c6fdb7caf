//! Command-line interface for moodwave.
//!
//! This module provides CLI commands for generating mood playlists,
//! listing the library, simulating playback and replaying sidebar drags.

mod commands;

pub use commands::{Cli, Commands, run_command};
