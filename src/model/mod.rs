//! Core data models shown by the client.
//!
//! Defines the read-only records fed into the layout and playback core:
//! [`Track`] and [`LibraryItem`], plus [`Artwork`] attached by enrichment.
//!
//! Tracks come either from the mock tables in [`mock`] or from the mood
//! playlist service; the core never cares which.

pub mod mock;

use serde::{Deserialize, Serialize};

use crate::enrichment::Gradient;

/// Artwork attached to a track or library item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Artwork {
    /// Not looked up yet
    #[default]
    Pending,
    /// Image URL returned by the artwork service
    Remote(String),
    /// Generated fallback when the lookup failed
    Placeholder(Gradient),
    /// Heart graphic reserved for the "Liked Songs" collection
    Liked,
}

impl Artwork {
    /// Image URL, if one was fetched.
    pub fn url(&self) -> Option<&str> {
        match self {
            Artwork::Remote(url) => Some(url),
            _ => None,
        }
    }

    /// True when a lookup failed and a gradient stands in.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Artwork::Placeholder(_))
    }
}

/// A song row in a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Duration as shown in the list, `m:ss`
    pub duration_label: String,
    /// Relative "date added" label, e.g. "2 days ago"
    pub date_added: Option<String>,
    #[serde(default)]
    pub artwork: Artwork,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration_label: duration_label.into(),
            date_added: None,
            artwork: Artwork::Pending,
        }
    }

    /// Set the relative "date added" label.
    pub fn with_date_added(mut self, label: impl Into<String>) -> Self {
        self.date_added = Some(label.into());
        self
    }

    /// Duration in whole seconds parsed from the label (0 when malformed).
    pub fn duration_secs(&self) -> u64 {
        parse_duration_label(&self.duration_label)
    }
}

/// An entry in the sidebar library (playlist, artist, collection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub title: String,
    /// Second line, e.g. "Playlist • JK"
    pub subtitle: String,
    #[serde(default)]
    pub artwork: Artwork,
}

impl LibraryItem {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            artwork: Artwork::Pending,
        }
    }

    /// The liked-songs collection keeps its heart graphic.
    pub fn is_liked_collection(&self) -> bool {
        self.title.to_lowercase().contains("liked")
    }
}

/// Parse an `m:ss` label into seconds.
///
/// Each part that is not a plain number counts as zero, and a label
/// without a colon is zero. Parsing never fails.
pub fn parse_duration_label(label: &str) -> u64 {
    let Some((minutes, seconds)) = label.trim().split_once(':') else {
        return 0;
    };
    let part = |s: &str| s.trim().parse::<u64>().unwrap_or(0);
    part(minutes).saturating_mul(60).saturating_add(part(seconds))
}

/// Format whole seconds as `m:ss`.
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
