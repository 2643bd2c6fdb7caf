//! Internal domain types shared by the external service clients.
//!
//! These types are OUR types - they don't change when external APIs change.
//! Service responses get converted into [`Track`](crate::model::Track)
//! records and [`Artwork`](crate::model::Artwork) via adapters.

use serde::{Deserialize, Serialize};

/// Errors that can occur while talking to external services
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No matches found")]
    NoMatches,

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Mood text is empty")]
    EmptyMood,
}

impl ServiceError {
    /// Transport-level failures a retry may fix. Client errors (4xx) are not.
    pub fn is_transient(&self) -> bool {
        match self {
            ServiceError::Network(_) | ServiceError::RateLimited => true,
            ServiceError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Colour stops of the fallback covers, as hex RGB.
const PALETTE: [(&str, &str); 8] = [
    ("#ec4899", "#fb923c"), // pink -> orange
    ("#a855f7", "#6366f1"), // purple -> indigo
    ("#4ade80", "#3b82f6"), // green -> blue
    ("#facc15", "#ef4444"), // yellow -> red
    ("#3b82f6", "#2dd4bf"), // blue -> teal
    ("#ef4444", "#a855f7"), // red -> purple
    ("#2dd4bf", "#3b82f6"), // teal -> blue
    ("#f97316", "#ec4899"), // orange -> pink
];

/// Deterministic placeholder cover, one of eight diagonal gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gradient(u8);

impl Gradient {
    /// Gradient for the item at `index` in a list.
    pub fn for_index(index: usize) -> Self {
        Self((index % PALETTE.len()) as u8)
    }

    /// (from, to) colour stops.
    pub fn stops(&self) -> (&'static str, &'static str) {
        PALETTE[self.0 as usize % PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_cycles() {
        assert_eq!(Gradient::for_index(0), Gradient::for_index(8));
        assert_ne!(Gradient::for_index(0), Gradient::for_index(1));
        assert_eq!(Gradient::for_index(3).stops(), ("#facc15", "#ef4444"));
    }

    #[test]
    fn test_transient_errors() {
        assert!(ServiceError::Network("timeout".to_string()).is_transient());
        assert!(!ServiceError::Parse("bad".to_string()).is_transient());
        assert!(!ServiceError::EmptyMood.is_transient());
        assert!(ServiceError::RateLimited.is_transient());
    }

    #[test]
    fn test_only_server_errors_are_transient() {
        let api = |status| ServiceError::Api {
            status,
            message: "x".to_string(),
        };
        assert!(api(500).is_transient());
        assert!(api(503).is_transient());
        assert!(!api(400).is_transient());
        assert!(!api(401).is_transient());
        assert!(!api(403).is_transient());
        assert!(!api(404).is_transient());
    }
}
