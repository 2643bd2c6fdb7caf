//! Mood playlist commands.

use std::time::Duration;

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::enrichment::EnrichmentService;
use crate::layout::NoCapture;
use crate::view::{MoodPhase, MoodSearch, StreamView, render};

/// What the user typed or picked
pub enum MoodInput {
    Text(String),
    /// 1-based preset number
    Preset(usize),
}

/// Generate and print a mood playlist
pub fn cmd_mood(
    rt: &Runtime,
    config: &Config,
    input: MoodInput,
    retries: u32,
    endpoint: Option<&str>,
) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(endpoint) = endpoint {
        config.mood.endpoint = endpoint.to_string();
    }

    let mut view = StreamView::new(&config, NoCapture)?;
    let search = view.mood_mut();
    match input {
        MoodInput::Text(text) => search.set_input(text),
        MoodInput::Preset(n) => {
            if !search.choose_preset(n.wrapping_sub(1)) {
                eprintln!("Error: no preset #{} (see `moodwave presets`).", n);
                return Ok(());
            }
        }
    }
    if search.submit().is_none() {
        eprintln!("Error: enter a mood first (or pick one from `moodwave presets`).");
        return Ok(());
    }

    let service = EnrichmentService::new(&config);
    let mut attempts = 0;

    rt.block_on(async {
        loop {
            if let MoodPhase::Generating { mood } = view.mood().phase() {
                println!("Generating playlist for \"{}\"...", mood);
            }
            let MoodPhase::Failed {
                message, transient, ..
            } = view.mood_mut().generate(&service).await
            else {
                break;
            };
            eprintln!("✗ {}", message);
            if !*transient || attempts >= retries {
                break;
            }
            attempts += 1;
            if view.mood_mut().retry().is_none() {
                break;
            }
        }
    });

    if !view.play_mood_results(Duration::ZERO) {
        eprintln!("No playlist generated. Use --retries to try again automatically.");
        return Ok(());
    }

    let tracks = view.tracks();
    if tracks.is_empty() {
        println!("The service answered, but no songs could be read from it.");
        return Ok(());
    }

    if let Some(header) = service.header_artwork(&mut rand::rng()) {
        println!("Header: {}", header);
    }
    println!();
    for row in render::track_table(tracks, Some(view.playback().selected)) {
        println!("{}", row);
    }
    println!();
    for (i, track) in tracks.iter().enumerate() {
        println!("{:>3}  {}", i + 1, render::artwork_label(&track.artwork));
    }
    Ok(())
}

/// List mood presets
pub fn cmd_presets(config: &Config) -> anyhow::Result<()> {
    let search = MoodSearch::new(config.mood.presets.clone());
    if search.presets().is_empty() {
        println!("No presets configured.");
        return Ok(());
    }
    for (i, preset) in search.presets().iter().enumerate() {
        println!("{:>2}. {}", i + 1, preset);
    }
    Ok(())
}
