//! Album artwork HTTP client
//!
//! Looks up cover images by artist and album name. No API key required,
//! but the service throttles bursts, so callers bound concurrency.

use super::dto;
use crate::config::{ArtworkConfig, ArtworkSize};
use crate::enrichment::domain::ServiceError;

/// Album artwork search client
pub struct ArtworkClient {
    http_client: reqwest::Client,
    base_url: String,
    size: ArtworkSize,
}

impl ArtworkClient {
    /// Create a client from config
    pub fn new(config: &ArtworkConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            size: config.size,
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            size: ArtworkSize::default(),
        }
    }

    /// Find a cover URL for an artist/album pair.
    pub async fn lookup(&self, artist: &str, album: &str) -> Result<String, ServiceError> {
        let url = self.search_url(artist, album);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ServiceError::NoMatches);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ServiceError::RateLimited);
        }

        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let search = response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))?;

        first_artwork(&search, self.size).ok_or(ServiceError::NoMatches)
    }

    fn search_url(&self, artist: &str, album: &str) -> String {
        let term = format!("{} {}", artist, album);
        format!(
            "{}/search?term={}&entity=album&limit=1",
            self.base_url,
            urlencoding::encode(term.trim())
        )
    }
}

/// Artwork URL of the first hit, rewritten to the requested size.
pub fn first_artwork(search: &dto::SearchResponse, size: ArtworkSize) -> Option<String> {
    let hit = search.results.first()?;
    let url = hit.artwork_url100.as_deref().or(hit.artwork_url60.as_deref())?;
    let px = size.pixels();
    let sized = format!("{}x{}bb", px, px);
    Some(url.replace("100x100bb", &sized).replace("60x60bb", &sized))
}
