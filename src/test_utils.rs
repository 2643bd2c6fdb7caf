//! Test utilities and fixtures for moodwave tests.
//!
//! Track factories shared by the playback, view and enrichment tests.
//!
//! # Example
//!
//! ```ignore
//! use moodwave::test_utils::{mock_track, tracks_with_durations};
//!
//! let tracks = tracks_with_durations(&["3:05", ""]);
//! assert_eq!(tracks[1].duration_secs(), 0);
//! ```

use crate::model::Track;

/// Creates a mock Track with sensible defaults (3:00 long).
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let track = Track {
///     title: "Custom Title".to_string(),
///     ..mock_track()
/// };
/// ```
pub fn mock_track() -> Track {
    Track::new("Test Track", "Test Artist", "Test Album", "3:00")
}

/// One track per duration label, titled "Track 0", "Track 1", ...
pub fn tracks_with_durations(labels: &[&str]) -> Vec<Track> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Track {
            title: format!("Track {}", i),
            duration_label: label.to_string(),
            ..mock_track()
        })
        .collect()
}

/// `count` tracks by distinct artists, "Artist 0" ... "Artist n-1".
pub fn tracks_by_artists(count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| Track {
            title: format!("Song {}", i),
            artist: format!("Artist {}", i),
            album: format!("Album {}", i),
            ..mock_track()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_track_defaults() {
        let track = mock_track();
        assert_eq!(track.duration_secs(), 180);
    }

    #[test]
    fn test_tracks_with_durations() {
        let tracks = tracks_with_durations(&["1:00", "bad"]);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].duration_secs(), 60);
        assert_eq!(tracks[1].duration_secs(), 0);
        assert_eq!(tracks[1].title, "Track 1");
    }
}
