//! Trait definitions for external service clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use moodwave::enrichment::traits::ArtworkApi;
//!
//! // In production code:
//! async fn cover<T: ArtworkApi>(client: &T) -> Option<String> {
//!     client.lookup("The Marias", "Submarine").await.ok()
//! }
//!
//! // In tests:
//! struct MockArtwork { ... }
//! impl ArtworkApi for MockArtwork { ... }
//! ```

use async_trait::async_trait;

use super::artwork::ArtworkClient;
use super::domain::ServiceError;
use super::mood::MoodClient;
use crate::model::Track;

/// Trait for mood-to-playlist generation.
#[async_trait]
pub trait MoodPlaylistApi: Send + Sync {
    /// Generate a playlist for a free-text mood.
    async fn generate(&self, mood: &str) -> Result<Vec<Track>, ServiceError>;
}

/// Trait for artwork lookup.
#[async_trait]
pub trait ArtworkApi: Send + Sync {
    /// Find a cover image URL for an artist/album pair.
    async fn lookup(&self, artist: &str, album: &str) -> Result<String, ServiceError>;
}

// Implement traits for real clients

#[async_trait]
impl MoodPlaylistApi for MoodClient {
    async fn generate(&self, mood: &str) -> Result<Vec<Track>, ServiceError> {
        self.generate(mood).await
    }
}

#[async_trait]
impl ArtworkApi for ArtworkClient {
    async fn lookup(&self, artist: &str, album: &str) -> Result<String, ServiceError> {
        self.lookup(artist, album).await
    }
}
