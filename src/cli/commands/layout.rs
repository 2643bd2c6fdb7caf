//! Sidebar layout commands.

use crate::config::Config;
use crate::layout::{CaptureTracker, NoCapture, PanelController};
use crate::model::{Artwork, mock};
use crate::view::{StreamView, render};

/// Replay a drag gesture and print the panel after each step
pub fn cmd_resize(config: &Config, positions: &[i32], toggle: bool) -> anyhow::Result<()> {
    let tracker = CaptureTracker::new();
    let mut panel = PanelController::new(config.layout.clone(), tracker.clone())?;
    println!("start        {}", render::panel_summary(panel.state()));

    if toggle {
        panel.toggle();
        println!("toggle       {}", render::panel_summary(panel.state()));
    }

    panel.begin_resize();
    for &x in positions {
        panel.on_pointer_move(x);
        println!("move {:>6}  {}", x, render::panel_summary(panel.state()));
    }
    panel.end_resize();
    println!("release      {}", render::panel_summary(panel.state()));

    println!(
        "\npointer capture: acquired {}, still held {}",
        tracker.acquired(),
        tracker.active()
    );
    Ok(())
}

/// Default output with no subcommand: layout summary and library
pub fn cmd_overview(config: &Config) -> anyhow::Result<()> {
    let mut view = StreamView::new(config, NoCapture)?;
    let mut library = mock::library_items();
    for item in library.iter_mut().filter(|i| i.is_liked_collection()) {
        item.artwork = Artwork::Liked;
    }
    view.set_library(library);
    view.set_tracks(mock::songs(), std::time::Duration::ZERO);

    let panel = view.panel().state();
    println!("{}", render::panel_summary(panel));
    for row in render::library_rows(view.library(), panel.collapsed) {
        println!("  {}", row);
    }
    println!();
    for row in render::track_table(view.tracks(), Some(view.playback().selected)) {
        println!("{}", row);
    }
    println!();
    println!("{}", render::player_bar(view.selected_track(), view.playback()));
    Ok(())
}
