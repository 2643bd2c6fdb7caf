//! Stream view: one sidebar, one player and the track list they share.
//!
//! The view is the unit of teardown. Dropping it (or calling
//! [`StreamView::teardown`]) cancels every scheduled frame and releases any
//! pointer capture held by an in-flight resize.

pub mod mood;
pub mod render;

pub use mood::{MoodPhase, MoodSearch};

use std::time::Duration;

use crate::config::Config;
use crate::layout::{LayoutError, NoCapture, PanelController, PointerCapture};
use crate::model::{LibraryItem, Track};
use crate::playback::{FrameQueue, PlaybackError, PlaybackState, ProgressSimulator};

pub struct StreamView<C: PointerCapture = NoCapture> {
    panel: PanelController<C>,
    player: ProgressSimulator<FrameQueue>,
    tracks: Vec<Track>,
    library: Vec<LibraryItem>,
    mood: MoodSearch,
}

impl<C: PointerCapture> StreamView<C> {
    pub fn new(config: &Config, capture: C) -> Result<Self, LayoutError> {
        let panel = PanelController::new(config.layout.clone(), capture)?;
        let player = ProgressSimulator::new(
            FrameQueue::new(config.playback.frame_interval()),
            config.playback.loop_pause(),
        );
        Ok(Self {
            panel,
            player,
            tracks: Vec::new(),
            library: Vec::new(),
            mood: MoodSearch::new(config.mood.presets.clone()),
        })
    }

    pub fn panel(&self) -> &PanelController<C> {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut PanelController<C> {
        &mut self.panel
    }

    pub fn player(&self) -> &ProgressSimulator<FrameQueue> {
        &self.player
    }

    pub fn playback(&self) -> &PlaybackState {
        self.player.state()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn library(&self) -> &[LibraryItem] {
        &self.library
    }

    pub fn set_library(&mut self, items: Vec<LibraryItem>) {
        self.library = items;
    }

    pub fn mood(&self) -> &MoodSearch {
        &self.mood
    }

    pub fn mood_mut(&mut self) -> &mut MoodSearch {
        &mut self.mood
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.tracks.get(self.player.state().selected)
    }

    /// Replace the track list and select its first entry.
    ///
    /// An empty list stops playback and leaves full screen.
    pub fn set_tracks(&mut self, tracks: Vec<Track>, now: Duration) {
        self.tracks = tracks;
        if let Err(e) = self.player.select_track(&self.tracks, 0, now) {
            tracing::debug!("{}; leaving full screen", e);
            self.player.exit_full_screen();
        }
    }

    /// Play the last successful mood playlist. Returns `false` if there is none.
    pub fn play_mood_results(&mut self, now: Duration) -> bool {
        let Some(tracks) = self.mood.results().map(<[Track]>::to_vec) else {
            return false;
        };
        self.set_tracks(tracks, now);
        true
    }

    pub fn select(&mut self, index: usize, now: Duration) -> Result<(), PlaybackError> {
        self.player.select_track(&self.tracks, index, now)
    }

    pub fn open_full_screen(&mut self, now: Duration) -> Result<(), PlaybackError> {
        self.player.enter_full_screen(&self.tracks, now)
    }

    pub fn close_full_screen(&mut self) {
        self.player.exit_full_screen();
    }

    pub fn toggle_full_screen(&mut self, now: Duration) -> Result<(), PlaybackError> {
        if self.player.state().full_screen {
            self.close_full_screen();
            Ok(())
        } else {
            self.open_full_screen(now)
        }
    }

    /// Earliest time the host should call [`Self::pump`] again.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.player.scheduler().next_deadline()
    }

    /// Deliver every frame due at `now`. Returns how many were live.
    pub fn pump(&mut self, now: Duration) -> usize {
        let due = self.player.scheduler_mut().take_due(now);
        due.into_iter()
            .filter(|&handle| self.player.on_frame(handle, now))
            .count()
    }

    /// Stop playback and abort any resize gesture.
    pub fn teardown(&mut self) {
        self.player.stop();
        self.panel.cancel_resize();
    }
}

impl<C: PointerCapture> Drop for StreamView<C> {
    fn drop(&mut self) {
        self.teardown();
        tracing::debug!("stream view torn down");
    }
}
