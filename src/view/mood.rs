//! Mood search flow.
//!
//! ```text
//! Form --submit--> Generating --ok--> Results
//!                      |
//!                      +--err--> Failed --retry--> Generating
//! Results | Failed --back--> Form
//! ```
//!
//! The request itself is issued by the caller with the mood returned from
//! [`MoodSearch::submit`] or [`MoodSearch::retry`], then reported back with
//! [`MoodSearch::complete`]. [`MoodSearch::generate`] does both in one call.

use crate::enrichment::{MoodPlaylistApi, ServiceError};
use crate::model::Track;

/// Where the mood page is.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MoodPhase {
    #[default]
    Form,
    /// Request in flight; the page shows a loading indicator
    Generating { mood: String },
    Results { mood: String, tracks: Vec<Track> },
    Failed {
        mood: String,
        message: String,
        /// Whether retrying the same request may succeed
        transient: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct MoodSearch {
    input: String,
    presets: Vec<String>,
    phase: MoodPhase,
}

impl MoodSearch {
    pub fn new(presets: Vec<String>) -> Self {
        Self {
            input: String::new(),
            presets,
            phase: MoodPhase::Form,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn presets(&self) -> &[String] {
        &self.presets
    }

    pub fn phase(&self) -> &MoodPhase {
        &self.phase
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.phase, MoodPhase::Generating { .. })
    }

    /// Fill the input from a preset chip. Returns `false` for an unknown index.
    pub fn choose_preset(&mut self, index: usize) -> bool {
        match self.presets.get(index) {
            Some(preset) => {
                self.input = preset.clone();
                true
            }
            None => false,
        }
    }

    /// Submit the form.
    ///
    /// Blank input is rejected here and nothing changes. Otherwise the page
    /// moves to `Generating` and the trimmed mood to request is returned.
    pub fn submit(&mut self) -> Option<String> {
        if self.is_generating() {
            return None;
        }
        let mood = self.input.trim();
        if mood.is_empty() {
            tracing::debug!("empty mood rejected");
            return None;
        }
        let mood = mood.to_string();
        tracing::info!(%mood, "generating mood playlist");
        self.phase = MoodPhase::Generating { mood: mood.clone() };
        Some(mood)
    }

    /// Re-issue the failed mood.
    pub fn retry(&mut self) -> Option<String> {
        let MoodPhase::Failed { mood, .. } = &self.phase else {
            return None;
        };
        let mood = mood.clone();
        tracing::info!(%mood, "retrying mood playlist");
        self.phase = MoodPhase::Generating { mood: mood.clone() };
        Some(mood)
    }

    /// Report the outcome of the request started by `submit` or `retry`.
    pub fn complete(&mut self, result: Result<Vec<Track>, ServiceError>) {
        if !self.is_generating() {
            tracing::debug!("mood result arrived with no request in flight");
            return;
        }
        let MoodPhase::Generating { mood } = std::mem::take(&mut self.phase) else {
            return;
        };
        self.phase = match result {
            Ok(tracks) => {
                tracing::info!(%mood, count = tracks.len(), "mood playlist ready");
                MoodPhase::Results { mood, tracks }
            }
            Err(e) => {
                tracing::warn!(%mood, "mood playlist failed: {}", e);
                MoodPhase::Failed {
                    mood,
                    message: e.to_string(),
                    transient: e.is_transient(),
                }
            }
        };
    }

    /// Run the in-flight request against `api`.
    pub async fn generate<M: MoodPlaylistApi + ?Sized>(&mut self, api: &M) -> &MoodPhase {
        if let MoodPhase::Generating { mood } = &self.phase {
            let mood = mood.clone();
            let result = api.generate(&mood).await;
            self.complete(result);
        }
        &self.phase
    }

    /// Back to the form. The last input is kept.
    pub fn back(&mut self) {
        self.phase = MoodPhase::Form;
    }

    /// Generated tracks, if the last request succeeded.
    pub fn results(&self) -> Option<&[Track]> {
        match &self.phase {
            MoodPhase::Results { tracks, .. } => Some(tracks),
            _ => None,
        }
    }
}
