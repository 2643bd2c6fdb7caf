//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\moodwave\config.toml
//! - macOS: ~/Library/Application Support/moodwave/config.toml
//! - Linux: ~/.config/moodwave/config.toml
//!
//! Only tunables live here (panel geometry, timings, service endpoints).
//! UI state such as the sidebar width is never written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::layout::PanelConfig;
use crate::playback::{DEFAULT_FRAME_INTERVAL, DEFAULT_LOOP_PAUSE};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sidebar geometry
    pub layout: PanelConfig,

    /// Progress simulator timings
    pub playback: PlaybackConfig,

    /// Mood playlist service
    pub mood: MoodConfig,

    /// Artwork lookup service
    pub artwork: ArtworkConfig,
}

/// Progress simulator timings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Pause at the end of a track before it loops
    pub loop_pause_ms: u64,

    /// Interval between animation frames
    pub frame_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            loop_pause_ms: DEFAULT_LOOP_PAUSE.as_millis() as u64,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL.as_millis() as u64,
        }
    }
}

impl PlaybackConfig {
    pub fn loop_pause(&self) -> Duration {
        Duration::from_millis(self.loop_pause_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

/// Mood playlist service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    /// Text-generation proxy endpoint
    pub endpoint: String,

    /// Sampling temperature passed through to the model
    pub temperature: f32,

    /// Token cap for the generated answer
    pub max_output_tokens: u32,

    /// Number of songs requested
    pub playlist_size: usize,

    /// Quick-select mood chips
    pub presets: Vec<String>,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://spotify-gemini-backend.onrender.com/api/generate".to_string(),
            temperature: 0.7,
            max_output_tokens: 500,
            playlist_size: 10,
            presets: [
                "Hindi Pop",
                "ADHD Soothing",
                "Workout Energy",
                "Focus Flow",
                "Bollywood Romance",
                "Chill Vibes",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Artist/album pair used as a library cover source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverRef {
    pub artist: String,
    pub album: String,
}

impl CoverRef {
    fn new(artist: &str, album: &str) -> Self {
        Self {
            artist: artist.to_string(),
            album: album.to_string(),
        }
    }
}

/// Desired artwork size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkSize {
    /// 100px thumbnail
    Small,
    /// 300px thumbnail
    Medium,
    /// 600px thumbnail (default)
    #[default]
    Large,
}

impl ArtworkSize {
    pub fn pixels(&self) -> u32 {
        match self {
            ArtworkSize::Small => 100,
            ArtworkSize::Medium => 300,
            ArtworkSize::Large => 600,
        }
    }
}

/// Artwork lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkConfig {
    /// Album search API root
    pub base_url: String,

    /// Preferred artwork size
    pub size: ArtworkSize,

    /// Lookups in flight at once
    pub max_concurrent: usize,

    /// Covers cycled through for sidebar library items
    pub library_covers: Vec<CoverRef>,

    /// Images the playlist header picks from at random
    pub header_images: Vec<String>,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            base_url: "https://itunes.apple.com".to_string(),
            size: ArtworkSize::Large,
            max_concurrent: 4,
            library_covers: vec![
                CoverRef::new("Travis Scott", "Astroworld"),
                CoverRef::new("Travis Scott", "UTOPIA"),
                CoverRef::new("Travis Scott", "Birds in the Trap Sing McKnight"),
                CoverRef::new("Travis Scott", "Rodeo"),
                CoverRef::new("Travis Scott", "Days Before Rodeo"),
                CoverRef::new("Travis Scott", "Owl Pharaoh"),
                CoverRef::new("Travis Scott", "Huncho Jack, Jack Huncho"),
                CoverRef::new("Travis Scott", "JACKBOYS"),
            ],
            header_images: (1..=4).map(|i| format!("/images/{}.webp", i)).collect(),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("moodwave"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location.
///
/// Returns default config if the file doesn't exist or can't be parsed.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("Could not determine config directory, using defaults");
            Config::default()
        }
    }
}

/// Load configuration from a specific file.
///
/// Logs warnings but doesn't fail - we always return a usable config.
/// Invalid panel geometry falls back to the default geometry.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    let mut config = match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                return Config::default();
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            return Config::default();
        }
    };

    if let Err(e) = config.layout.validate() {
        tracing::error!("{}; using default panel geometry", e);
        config.layout = PanelConfig::default();
    }
    config
}

/// Save configuration to the default location.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
