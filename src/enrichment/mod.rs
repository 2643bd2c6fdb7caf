//! Enrichment module - generates mood playlists and fetches artwork from external services.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain types** (`domain.rs`) - Errors and placeholder gradients
//! - **API DTOs** (`mood/dto.rs`, `artwork/dto.rs`) - Exact API request/response shapes
//! - **Adapters** - Convert DTOs and model text to `Track`s
//! - **Clients** - HTTP clients for external APIs
//! - **Service** - Ordered, bounded fan-out of artwork lookups
//!
//! # Usage
//!
//! ```ignore
//! use moodwave::enrichment::EnrichmentService;
//!
//! let service = EnrichmentService::new(&config);
//! let tracks = service.mood_playlist("Late Night Vibes").await?;
//! for t in &tracks {
//!     println!("{} - {} ({:?})", t.title, t.artist, t.artwork.url());
//! }
//! ```

pub mod artwork;
pub mod domain;
pub mod mood;
pub mod service;
pub mod traits;

pub use artwork::ArtworkClient;
pub use domain::{Gradient, ServiceError};
pub use mood::MoodClient;
pub use service::EnrichmentService;
pub use traits::{ArtworkApi, MoodPlaylistApi};
