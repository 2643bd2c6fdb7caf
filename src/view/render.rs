//! Plain-text rendering for the terminal front end.
//!
//! The inline bar and the full-screen view read the same
//! [`PlaybackState`]; they differ only in layout.

use crate::layout::PanelState;
use crate::model::{Artwork, LibraryItem, Track};
use crate::playback::PlaybackState;

const BAR_CELLS: usize = 30;

/// `[#########---------]` for a fraction in 0..=1.
pub fn progress_bar(fraction: f64, cells: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * cells as f64).round() as usize).min(cells);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(cells - filled))
}

/// Inline player bar: elapsed, bar and total duration.
pub fn player_bar(track: Option<&Track>, state: &PlaybackState) -> String {
    let label = track
        .map(|t| format!("{} - {}", t.title, t.artist))
        .unwrap_or_else(|| "Nothing selected".to_string());
    format!(
        "{}  {} {} {}",
        label,
        state.elapsed_str(),
        progress_bar(state.progress, BAR_CELLS),
        state.duration_str()
    )
}

/// Full-screen now-playing block: elapsed and remaining time.
pub fn full_screen(track: Option<&Track>, state: &PlaybackState) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);
    if let Some(t) = track {
        lines.push(t.title.clone());
        lines.push(format!("{} • {}", t.artist, t.album));
    }
    lines.push(progress_bar(state.progress, BAR_CELLS * 2));
    lines.push(format!(
        "{:<width$}-{}",
        state.elapsed_str(),
        state.remaining_str(),
        width = BAR_CELLS * 2 + 1
    ));
    lines
}

pub fn panel_summary(panel: PanelState) -> String {
    let mode = if panel.collapsed { "collapsed" } else { "expanded" };
    let drag = if panel.resizing { " (resizing)" } else { "" };
    format!("sidebar {}px {}{}", panel.width, mode, drag)
}

/// Sidebar rows. Collapsed panels show only the artwork glyph.
pub fn library_rows(items: &[LibraryItem], collapsed: bool) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let glyph = artwork_glyph(&item.artwork);
            if collapsed {
                glyph.to_string()
            } else {
                format!("{} {}  {}", glyph, item.title, item.subtitle)
            }
        })
        .collect()
}

/// Playlist table with a marker on the selected row.
pub fn track_table(tracks: &[Track], selected: Option<usize>) -> Vec<String> {
    let mut rows = Vec::with_capacity(tracks.len() + 1);
    rows.push(format!(
        "   {:>3}  {:<32} {:<28} {:<14} {:>5}",
        "#", "Title", "Album", "Date added", "Time"
    ));
    for (i, t) in tracks.iter().enumerate() {
        let marker = if Some(i) == selected { ">" } else { " " };
        rows.push(format!(
            "{}  {:>3}  {:<32} {:<28} {:<14} {:>5}",
            marker,
            i + 1,
            truncate(&format!("{} - {}", t.title, t.artist), 32),
            truncate(&t.album, 28),
            t.date_added.as_deref().unwrap_or(""),
            t.duration_label
        ));
    }
    rows
}

/// One-line description of a track's artwork.
pub fn artwork_label(artwork: &Artwork) -> String {
    match artwork {
        Artwork::Pending => "pending".to_string(),
        Artwork::Remote(url) => url.clone(),
        Artwork::Placeholder(g) => {
            let (from, to) = g.stops();
            format!("placeholder {} -> {}", from, to)
        }
        Artwork::Liked => "liked".to_string(),
    }
}

fn artwork_glyph(artwork: &Artwork) -> &'static str {
    match artwork {
        Artwork::Liked => "♥",
        Artwork::Remote(_) => "▣",
        Artwork::Placeholder(_) => "▩",
        Artwork::Pending => "□",
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
