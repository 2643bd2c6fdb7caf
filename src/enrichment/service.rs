//! Enrichment service - orchestrates mood playlists and artwork lookup
//!
//! This is the high-level API the views use:
//! 1. Generate a playlist for a mood (whole-flow: failures propagate)
//! 2. Attach artwork to every track (per-item: failures become placeholders)
//! 3. Attach artwork to library items from a cover pool
//!
//! Artwork lookups fan out with bounded concurrency and are joined back in
//! input order. One failed lookup never cancels or delays the verdict on
//! the others.

use async_trait::async_trait;
use futures::StreamExt;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::{ArtworkConfig, Config, CoverRef};
use crate::enrichment::{
    artwork::ArtworkClient,
    domain::{Gradient, ServiceError},
    mood::MoodClient,
    traits::{ArtworkApi, MoodPlaylistApi},
};
use crate::model::{Artwork, LibraryItem, Track};

/// Service for generating and decorating playlists from external sources
pub struct EnrichmentService<M = MoodClient, A = ArtworkClient> {
    mood: M,
    artwork: A,
    config: ArtworkConfig,
}

impl EnrichmentService {
    /// Create a service backed by the real HTTP clients
    pub fn new(config: &Config) -> Self {
        Self {
            mood: MoodClient::new(&config.mood),
            artwork: ArtworkClient::new(&config.artwork),
            config: config.artwork.clone(),
        }
    }
}

impl<M: MoodPlaylistApi, A: ArtworkApi> EnrichmentService<M, A> {
    /// Create a service from arbitrary clients (mocks in tests)
    pub fn with_clients(mood: M, artwork: A, config: ArtworkConfig) -> Self {
        Self {
            mood,
            artwork,
            config,
        }
    }

    pub fn artwork_api(&self) -> &A {
        &self.artwork
    }

    /// Generate a mood playlist and attach artwork.
    pub async fn mood_playlist(&self, mood: &str) -> Result<Vec<Track>, ServiceError> {
        let tracks = self.mood.generate(mood).await?;
        Ok(self.enrich_tracks(tracks).await)
    }

    /// Attach artwork to tracks, keeping their order.
    pub async fn enrich_tracks(&self, tracks: Vec<Track>) -> Vec<Track> {
        enrich_tracks(&self.artwork, tracks, self.config.max_concurrent).await
    }

    /// Attach artwork to library items from the configured cover pool.
    pub async fn enrich_library(&self, items: Vec<LibraryItem>) -> Vec<LibraryItem> {
        enrich_library(
            &self.artwork,
            items,
            &self.config.library_covers,
            self.config.max_concurrent,
        )
        .await
    }

    /// Pick a playlist header image at random.
    pub fn header_artwork<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        header_artwork(&self.config.header_images, rng)
    }
}

/// A service generates playlists with artwork already attached.
#[async_trait]
impl<M: MoodPlaylistApi, A: ArtworkApi> MoodPlaylistApi for EnrichmentService<M, A> {
    async fn generate(&self, mood: &str) -> Result<Vec<Track>, ServiceError> {
        self.mood_playlist(mood).await
    }
}

/// Fan out one artwork lookup per track.
///
/// Output order matches input order. A failed or empty lookup yields the
/// placeholder gradient for that track's index.
pub async fn enrich_tracks<A: ArtworkApi + ?Sized>(
    api: &A,
    tracks: Vec<Track>,
    max_concurrent: usize,
) -> Vec<Track> {
    let total = tracks.len();
    let enriched: Vec<Track> = futures::stream::iter(tracks.into_iter().enumerate())
        .map(|(index, mut track)| async move {
            track.artwork = resolve(api, index, &track.artist, &track.album).await;
            track
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

    let fallbacks = enriched.iter().filter(|t| t.artwork.is_placeholder()).count();
    tracing::info!("Enriched {}/{} tracks with artwork", total - fallbacks, total);
    enriched
}

/// Attach artwork to library items.
///
/// The liked-songs collection keeps its heart graphic. Every other item
/// takes cover `index % covers.len()`; with no covers configured, items
/// get placeholders without any lookup.
pub async fn enrich_library<A: ArtworkApi + ?Sized>(
    api: &A,
    items: Vec<LibraryItem>,
    covers: &[CoverRef],
    max_concurrent: usize,
) -> Vec<LibraryItem> {
    futures::stream::iter(items.into_iter().enumerate())
        .map(|(index, mut item)| async move {
            item.artwork = if item.is_liked_collection() {
                Artwork::Liked
            } else if covers.is_empty() {
                Artwork::Placeholder(Gradient::for_index(index))
            } else {
                let cover = &covers[index % covers.len()];
                resolve(api, index, &cover.artist, &cover.album).await
            };
            item
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await
}

/// Pick one image path at random.
pub fn header_artwork<'a, R: Rng + ?Sized>(images: &'a [String], rng: &mut R) -> Option<&'a str> {
    images.choose(rng).map(String::as_str)
}

/// One lookup inside its own failure boundary.
async fn resolve<A: ArtworkApi + ?Sized>(api: &A, index: usize, artist: &str, album: &str) -> Artwork {
    match api.lookup(artist, album).await {
        Ok(url) if !url.is_empty() => Artwork::Remote(url),
        Ok(_) => Artwork::Placeholder(Gradient::for_index(index)),
        Err(e) => {
            tracing::debug!("Artwork lookup failed for {} - {}: {}", artist, album, e);
            Artwork::Placeholder(Gradient::for_index(index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::traits::mocks::{MockArtwork, MockMood};
    use crate::model::mock;
    use crate::test_utils::tracks_by_artists;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn service(mood: MockMood, artwork: MockArtwork) -> EnrichmentService<MockMood, MockArtwork> {
        EnrichmentService::with_clients(mood, artwork, ArtworkConfig::default())
    }

    #[tokio::test]
    async fn test_one_failure_among_ten() {
        let tracks = tracks_by_artists(10);
        let api = MockArtwork::failing_for(&["Artist 6"]);

        let enriched = enrich_tracks(&api, tracks, 3).await;

        assert_eq!(enriched.len(), 10);
        assert_eq!(enriched.iter().filter(|t| t.artwork.url().is_some()).count(), 9);
        assert_eq!(enriched[6].artwork, Artwork::Placeholder(Gradient::for_index(6)));
        for (i, track) in enriched.iter().enumerate() {
            assert_eq!(track.title, format!("Song {}", i));
        }
        assert_eq!(api.calls(), 10);
    }

    #[tokio::test]
    async fn test_all_failures_keep_list() {
        let tracks = tracks_by_artists(3);
        let api = MockArtwork::failing_for(&["Artist 0", "Artist 1", "Artist 2"]);
        let enriched = enrich_tracks(&api, tracks, 0).await;
        assert!(enriched.iter().all(|t| t.artwork.is_placeholder()));
    }

    #[tokio::test]
    async fn test_enrich_library() {
        let api = MockArtwork::failing_for(&[]);
        let covers = ArtworkConfig::default().library_covers;
        let items = enrich_library(&api, mock::library_items(), &covers, 4).await;

        let liked = items.iter().find(|i| i.is_liked_collection()).unwrap();
        assert_eq!(liked.artwork, Artwork::Liked);
        assert!(items[0].artwork.url().unwrap().contains("Astroworld"));
        assert!(items[1].artwork.url().unwrap().contains("UTOPIA"));
        // Liked Songs is skipped, so seven lookups
        assert_eq!(api.calls(), 7);
    }

    #[tokio::test]
    async fn test_enrich_library_without_covers() {
        let api = MockArtwork::succeeding();
        let items = enrich_library(&api, mock::library_items(), &[], 4).await;
        assert!(items[0].artwork.is_placeholder());
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_mood_playlist_enriches() {
        let svc = service(
            MockMood::with_tracks(tracks_by_artists(2)),
            MockArtwork::failing_for(&["Artist 1"]),
        );
        let tracks = svc.mood_playlist("Focus Flow").await.unwrap();
        assert!(tracks[0].artwork.url().is_some());
        assert!(tracks[1].artwork.is_placeholder());
    }

    #[tokio::test]
    async fn test_mood_failure_propagates() {
        let svc = service(
            MockMood::scripted(vec![Err(ServiceError::Network("offline".to_string()))]),
            MockArtwork::succeeding(),
        );
        assert!(svc.mood_playlist("Focus Flow").await.is_err());
        assert_eq!(svc.artwork_api().calls(), 0);
    }

    #[tokio::test]
    async fn test_service_drives_mood_search() {
        use crate::view::MoodSearch;

        let svc = service(
            MockMood::with_tracks(tracks_by_artists(3)),
            MockArtwork::failing_for(&["Artist 2"]),
        );
        let mut search = MoodSearch::new(Vec::new());
        search.set_input("Workout Energy");
        search.submit();
        search.generate(&svc).await;

        let tracks = search.results().unwrap();
        assert_eq!(tracks.len(), 3);
        assert!(tracks[0].artwork.url().is_some());
        assert!(tracks[2].artwork.is_placeholder());
    }

    #[test]
    fn test_header_artwork_is_from_pool() {
        let svc = service(MockMood::scripted(vec![]), MockArtwork::succeeding());
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let pick = svc.header_artwork(&mut rng).unwrap();
            assert!(pick.starts_with("/images/") && pick.ends_with(".webp"));
        }
        assert_eq!(header_artwork(&[], &mut rng), None);
    }

    #[test]
    fn test_real_service_creation() {
        let svc = EnrichmentService::new(&Config::default());
        assert_eq!(svc.config.max_concurrent, 4);
    }
}
