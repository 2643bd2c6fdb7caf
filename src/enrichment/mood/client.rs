//! Mood playlist HTTP client
//!
//! Sends a prompt describing the user's mood to a text-generation proxy
//! and turns the answer into a track list.

use super::{adapter, dto};
use crate::config::MoodConfig;
use crate::enrichment::domain::ServiceError;
use crate::model::Track;

/// Mood playlist service client
pub struct MoodClient {
    http_client: reqwest::Client,
    endpoint: String,
    temperature: f32,
    max_output_tokens: u32,
    playlist_size: usize,
}

impl MoodClient {
    /// Create a client from config
    pub fn new(config: &MoodConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            playlist_size: config.playlist_size,
        }
    }

    /// Create a client for testing with custom endpoint
    #[cfg(test)]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::new(&MoodConfig::default())
        }
    }

    /// Generate a playlist for a mood.
    ///
    /// Empty mood text is rejected before any request is made. A reply that
    /// can't be parsed yields an empty list rather than an error.
    pub async fn generate(&self, mood: &str) -> Result<Vec<Track>, ServiceError> {
        let mood = mood.trim();
        if mood.is_empty() {
            return Err(ServiceError::EmptyMood);
        }

        let request = dto::GenerateRequest {
            prompt: build_prompt(mood, self.playlist_size),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        };

        tracing::info!(mood, "Requesting mood playlist");
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ServiceError::RateLimited);
        }

        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let tracks = adapter::body_to_tracks(&body);
        tracing::info!(count = tracks.len(), "Mood playlist received");
        Ok(tracks)
    }
}

/// Prompt asking for `size` songs in the JSON shape the adapter reads.
pub fn build_prompt(mood: &str, size: usize) -> String {
    format!(
        r#"I need a JSON playlist. I will give you a mood and you will give me a playlist of {size} songs.
User mood: {mood}
Return the data strictly in the following JSON format:
[
  {{
    "title": "Song Title",
    "artist": "Artist Name",
    "album": "Album Name",
    "duration": "4:30",
    "days": "2 days ago"
  }}
]"#
    )
}
