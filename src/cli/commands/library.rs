//! Library listing command.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::enrichment::EnrichmentService;
use crate::model::{Artwork, mock};
use crate::view::render;

/// Print the sidebar library and the song table
pub fn cmd_library(rt: &Runtime, config: &Config, artwork: bool) -> anyhow::Result<()> {
    let mut items = mock::library_items();
    let mut songs = mock::songs();

    if artwork {
        let service = EnrichmentService::new(config);
        println!("Fetching artwork...");
        (items, songs) = rt.block_on(async {
            let items = service.enrich_library(items).await;
            let songs = service.enrich_tracks(songs).await;
            (items, songs)
        });
    } else {
        for item in items.iter_mut().filter(|i| i.is_liked_collection()) {
            item.artwork = Artwork::Liked;
        }
    }

    println!("Your Library");
    for row in render::library_rows(&items, false) {
        println!("  {}", row);
    }
    println!();
    for row in render::track_table(&songs, None) {
        println!("{}", row);
    }

    if artwork {
        println!();
        for item in &items {
            println!("{:<24} {}", item.title, render::artwork_label(&item.artwork));
        }
        let fallbacks = songs.iter().filter(|s| s.artwork.is_placeholder()).count();
        println!(
            "\nSongs with artwork: {}/{} ({} placeholders)",
            songs.len() - fallbacks,
            songs.len(),
            fallbacks
        );
    }
    Ok(())
}
