//! Application-wide error types.
//!
//! This module provides a unified error hierarchy for the application.
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors (e.g., [`ServiceError`]) for detailed handling
//! - All errors implement `std::error::Error` for compatibility
//!
//! # Example
//!
//! ```ignore
//! use moodwave::error::{Result, ResultExt};
//!
//! fn start(view: &mut StreamView, index: usize) -> Result<()> {
//!     view.select(index).with_context("while starting playback")?;
//!     Ok(())
//! }
//! ```

use crate::config::ConfigError;
use crate::enrichment::ServiceError;
use crate::layout::LayoutError;
use crate::playback::PlaybackError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Panel layout error
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Playback simulation error
    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    /// Mood or artwork service error
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: Error = PlaybackError::TrackOutOfRange { index: 9, len: 3 }.into();
        assert!(err.to_string().contains("9"));
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::from(ServiceError::RateLimited).context("while generating playlist");
        let msg = err.to_string();
        assert!(msg.contains("while generating playlist"));
    }

    #[test]
    fn test_result_ext() {
        let result: std::result::Result<(), LayoutError> =
            Err(LayoutError::InvalidConfig("min_width > max_width".to_string()));
        let with_ctx = result.with_context("loading layout");
        let msg = with_ctx.unwrap_err().to_string();
        assert!(msg.contains("loading layout"));
        assert!(msg.contains("min_width"));
    }

    #[test]
    fn test_result_ext_on_own_result() {
        let result: Result<()> = Err(Error::Service(ServiceError::EmptyMood));
        assert!(matches!(
            result.with_context("outer"),
            Err(Error::WithContext { .. })
        ));
    }
}
