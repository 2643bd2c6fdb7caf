//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `mood`: Mood playlist generation and preset listing
//! - `library`: Mock library and song table, optionally with artwork
//! - `play`: Full-screen progress simulation in the terminal
//! - `layout`: Sidebar drag replay and the default overview
//! - `settings`: Effective configuration and `--init`

mod layout;
mod library;
mod mood;
mod play;
mod settings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config;

pub use layout::{cmd_overview, cmd_resize};
pub use library::cmd_library;
pub use mood::{MoodInput, cmd_mood, cmd_presets};
pub use play::cmd_play;
pub use settings::cmd_config;

/// Moodwave CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true, env = "MOODWAVE_CONFIG")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a playlist for a mood
    Mood {
        /// Free-text mood, e.g. "late night drive"
        #[arg(required_unless_present = "preset", num_args = 1..)]
        mood: Vec<String>,
        /// Use a preset chip instead (number from `moodwave presets`)
        #[arg(short, long, conflicts_with = "mood")]
        preset: Option<usize>,
        /// Retry this many times if the service fails
        #[arg(short, long, default_value = "0")]
        retries: u32,
        /// Mood service endpoint (overrides config)
        #[arg(long, env = "MOODWAVE_MOOD_ENDPOINT")]
        endpoint: Option<String>,
    },
    /// List the mood preset chips
    Presets,
    /// Print the library sidebar and the song table
    Library {
        /// Fetch artwork for every entry
        #[arg(long)]
        artwork: bool,
    },
    /// Simulate playback of a track in the full-screen view
    Play {
        /// Track number in the song table (starting at 1)
        #[arg(default_value = "1")]
        index: usize,
        /// Stop after this many loops (0 = until Ctrl-C)
        #[arg(short, long, default_value = "1")]
        cycles: u32,
    },
    /// Replay a sidebar drag through the given pointer positions
    Resize {
        /// Pointer x positions in window pixels
        #[arg(required = true, allow_negative_numbers = true)]
        positions: Vec<i32>,
        /// Toggle the sidebar before dragging
        #[arg(long)]
        toggle: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write the defaults to the config file
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
///
/// With no command, prints the default overview.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config = match &cli.config_file {
        Some(path) => config::load_from(path),
        None => config::load(),
    };

    match &cli.command {
        Some(Commands::Mood {
            mood,
            preset,
            retries,
            endpoint,
        }) => {
            let input = match preset {
                Some(n) => MoodInput::Preset(*n),
                None => MoodInput::Text(mood.join(" ")),
            };
            cmd_mood(&rt, &config, input, *retries, endpoint.as_deref())
        }
        Some(Commands::Presets) => cmd_presets(&config),
        Some(Commands::Library { artwork }) => cmd_library(&rt, &config, *artwork),
        Some(Commands::Play { index, cycles }) => cmd_play(&rt, &config, *index, *cycles),
        Some(Commands::Resize { positions, toggle }) => cmd_resize(&config, positions, *toggle),
        Some(Commands::Config { init }) => cmd_config(&config, cli.config_file.as_deref(), *init),
        None => cmd_overview(&config),
    }
}
