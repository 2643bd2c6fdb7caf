//! Adapter: free-text model output -> domain tracks
//!
//! The model is asked for a bare JSON array but often wraps it in prose or
//! a code fence. We slice from the first `[` to the last `]` and parse
//! that. Anything unusable becomes an empty playlist, never an error.

use super::dto::{GenerateResponse, Song};
use crate::model::Track;

/// Slice the outermost JSON array out of `raw`, if there is one.
pub fn extract_json_array(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    (start < end).then(|| &raw[start..=end])
}

/// Convert a raw response body to tracks. Malformed bodies yield an empty list.
pub fn body_to_tracks(body: &str) -> Vec<Track> {
    match serde_json::from_str::<GenerateResponse>(body) {
        Ok(response) => response_to_tracks(&response),
        Err(e) => {
            tracing::warn!("Mood service returned a malformed envelope: {}", e);
            Vec::new()
        }
    }
}

/// Convert the first candidate's text to tracks.
pub fn response_to_tracks(response: &GenerateResponse) -> Vec<Track> {
    let text = response
        .candidates
        .first()
        .map(|c| c.output.as_str())
        .unwrap_or_default();
    text_to_tracks(text)
}

/// Parse the JSON array embedded in model output.
pub fn text_to_tracks(text: &str) -> Vec<Track> {
    let Some(json) = extract_json_array(text) else {
        tracing::warn!("Mood service output contains no JSON array");
        return Vec::new();
    };

    match serde_json::from_str::<Vec<Song>>(json) {
        Ok(songs) => songs.into_iter().map(to_track).collect(),
        Err(e) => {
            tracing::warn!("Mood service output is not a song list: {}", e);
            Vec::new()
        }
    }
}

fn to_track(song: Song) -> Track {
    let track = Track::new(song.title, song.artist, song.album, song.duration);
    match song.days {
        Some(days) => track.with_date_added(days),
        None => track,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_prose() {
        let raw = "Here you go:\n```json\n[{\"a\":1}]\n```\nEnjoy!";
        assert_eq!(extract_json_array(raw), Some("[{\"a\":1}]"));
    }

    #[test]
    fn test_extract_missing_brackets() {
        assert_eq!(extract_json_array("no list here"), None);
        assert_eq!(extract_json_array("] backwards ["), None);
    }

    #[test]
    fn test_text_to_tracks() {
        let text = r#"Sure! [
            {"title": "Kesariya", "artist": "Arijit Singh", "album": "Brahmastra", "duration": "4:28", "days": "2 days ago"},
            {"title": "Levitating", "artist": "Dua Lipa", "album": "Future Nostalgia", "duration": "3:23"}
        ]"#;
        let tracks = text_to_tracks(text);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].title, "Kesariya");
        assert_eq!(tracks[0].duration_secs(), 268);
        assert_eq!(tracks[0].date_added.as_deref(), Some("2 days ago"));
        assert!(tracks[1].date_added.is_none());
    }

    #[test]
    fn test_malformed_output_is_empty() {
        assert!(text_to_tracks("[not json]").is_empty());
        assert!(text_to_tracks("").is_empty());
        assert!(body_to_tracks("<html>502</html>").is_empty());
        assert!(body_to_tracks(r#"{"candidates": []}"#).is_empty());
    }

    #[test]
    fn test_body_to_tracks() {
        let body = r#"{"candidates":[{"output":"[{\"title\":\"T\",\"artist\":\"A\",\"album\":\"B\",\"duration\":\"x\"}]"}]}"#;
        let tracks = body_to_tracks(body);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].duration_secs(), 0);
    }
}
