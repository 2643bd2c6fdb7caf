//! Playback state shared by the inline player bar and the full-screen view.

use crate::model::format_clock;

/// Simulated position of the selected track.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Index into the current track list
    pub selected: usize,
    /// Whole seconds elapsed, `<= duration_secs`
    pub elapsed_secs: u64,
    /// Fraction of the track played (0.0 - 1.0)
    pub progress: f64,
    /// Duration of the selected track, parsed at the start of the run
    pub duration_secs: u64,
    /// Alternate rendering only; never changes the values above
    pub full_screen: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            selected: 0,
            elapsed_secs: 0,
            progress: 0.0,
            duration_secs: 0,
            full_screen: false,
        }
    }
}

impl PlaybackState {
    /// Seconds left, never negative.
    pub fn remaining_secs(&self) -> u64 {
        self.duration_secs.saturating_sub(self.elapsed_secs)
    }

    /// Format elapsed as M:SS.
    pub fn elapsed_str(&self) -> String {
        format_clock(self.elapsed_secs)
    }

    /// Format remaining as M:SS (full-screen view).
    pub fn remaining_str(&self) -> String {
        format_clock(self.remaining_secs())
    }

    /// Format duration as M:SS (inline bar).
    pub fn duration_str(&self) -> String {
        format_clock(self.duration_secs)
    }

    pub(crate) fn reset(&mut self) {
        self.elapsed_secs = 0;
        self.progress = 0.0;
    }
}
