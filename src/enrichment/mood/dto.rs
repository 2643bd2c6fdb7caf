//! Mood playlist service Data Transfer Objects
//!
//! These types match EXACTLY what the text-generation proxy accepts and
//! returns. DO NOT use these types outside the mood module - convert to
//! domain types.
//!
//! The proxy wraps a generative model: the request carries a prompt, the
//! response carries free text in `candidates[0].output`, and that text is
//! expected (not guaranteed) to contain a JSON array of songs.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Response envelope
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated completion
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Candidate {
    #[serde(default)]
    pub output: String,
}

/// Song object the prompt asks the model to emit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: String,
    /// "m:ss"
    #[serde(default)]
    pub duration: String,
    /// Relative date, e.g. "2 days ago"
    #[serde(default)]
    pub days: Option<String>,
}
