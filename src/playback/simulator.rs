//! Playback progress simulator.
//!
//! No audio plays. While the full-screen view is open the simulator
//! advances the selected track's elapsed time from wall-clock timestamps,
//! so the bar moves at the same speed whatever the frame rate:
//!
//! ```text
//! Idle --enter full screen / select while full screen--> Running
//! Running --progress reaches 1--> Looping --pause elapsed--> Running
//! Running | Looping --exit full screen / drop--> Idle
//! ```
//!
//! At most one scheduler handle is pending at any time. It is cancelled
//! before a new one is requested and when the simulator is dropped.

use std::time::Duration;

use super::PlaybackError;
use super::scheduler::{FrameHandle, FrameScheduler};
use super::state::PlaybackState;
use crate::model::Track;

/// Pause between reaching the end of a track and restarting it.
pub const DEFAULT_LOOP_PAUSE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { started: Duration },
    /// Track finished; waiting for the loop pause
    Looping,
    /// Zero-length track: progress pinned at 1, nothing scheduled
    Complete,
}

pub struct ProgressSimulator<S: FrameScheduler> {
    state: PlaybackState,
    phase: Phase,
    pending: Option<FrameHandle>,
    scheduler: S,
    loop_pause: Duration,
}

impl<S: FrameScheduler> ProgressSimulator<S> {
    pub fn new(scheduler: S, loop_pause: Duration) -> Self {
        Self {
            state: PlaybackState::default(),
            phase: Phase::Idle,
            pending: None,
            scheduler,
            loop_pause,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Hosts poll due handles through this and feed them to [`Self::on_frame`].
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Handle the simulator is waiting on, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Select a track by index.
    ///
    /// Progress resets to zero. If the full-screen view is open, a fresh run
    /// starts against the new track's duration.
    pub fn select_track(
        &mut self,
        tracks: &[Track],
        index: usize,
        now: Duration,
    ) -> Result<(), PlaybackError> {
        let track = tracks.get(index).ok_or(PlaybackError::TrackOutOfRange {
            index,
            len: tracks.len(),
        })?;
        self.state.selected = index;
        self.state.duration_secs = track.duration_secs();
        self.state.reset();
        tracing::debug!(index, title = %track.title, "track selected");

        if self.state.full_screen {
            self.start_run(now);
        }
        Ok(())
    }

    /// Open the full-screen view and start a run from zero.
    pub fn enter_full_screen(&mut self, tracks: &[Track], now: Duration) -> Result<(), PlaybackError> {
        let index = self.state.selected;
        let track = tracks.get(index).ok_or(PlaybackError::TrackOutOfRange {
            index,
            len: tracks.len(),
        })?;
        self.state.duration_secs = track.duration_secs();
        self.state.full_screen = true;
        self.start_run(now);
        Ok(())
    }

    /// Close the full-screen view. Values freeze where they are.
    pub fn exit_full_screen(&mut self) {
        self.state.full_screen = false;
        self.stop();
    }

    /// Cancel any scheduled callback and go idle.
    pub fn stop(&mut self) {
        self.cancel_pending();
        self.phase = Phase::Idle;
    }

    /// Deliver a due handle. Stale or cancelled handles are ignored.
    ///
    /// Returns `true` if the handle was the live one.
    pub fn on_frame(&mut self, handle: FrameHandle, now: Duration) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;

        match self.phase {
            Phase::Running { started } => self.advance(started, now),
            Phase::Looping => {
                tracing::debug!(selected = self.state.selected, "loop restart");
                self.start_run(now);
            }
            Phase::Idle | Phase::Complete => {}
        }
        true
    }

    fn advance(&mut self, started: Duration, now: Duration) {
        let duration_ms = self.state.duration_secs.saturating_mul(1000);
        let elapsed_ms = now.saturating_sub(started).as_millis() as u64;

        self.state.progress = (elapsed_ms as f64 / duration_ms as f64).min(1.0);
        self.state.elapsed_secs = (elapsed_ms / 1000).min(self.state.duration_secs);

        if self.state.progress >= 1.0 {
            self.phase = Phase::Looping;
            self.pending = Some(self.scheduler.schedule_after(now, self.loop_pause));
        } else {
            self.pending = Some(self.scheduler.request_frame(now));
        }
    }

    fn start_run(&mut self, now: Duration) {
        self.cancel_pending();
        self.state.reset();

        if self.state.duration_secs == 0 {
            self.state.progress = 1.0;
            self.phase = Phase::Complete;
            tracing::warn!(
                selected = self.state.selected,
                "track has no usable duration, progress pinned"
            );
            return;
        }

        self.phase = Phase::Running { started: now };
        self.pending = Some(self.scheduler.request_frame(now));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for ProgressSimulator<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::clock::{Clock, ManualClock};
    use crate::playback::scheduler::FrameQueue;
    use crate::test_utils::{mock_track, tracks_with_durations};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn simulator() -> ProgressSimulator<FrameQueue> {
        ProgressSimulator::new(FrameQueue::new(ms(16)), DEFAULT_LOOP_PAUSE)
    }

    /// Deliver everything due at `now`.
    fn pump(sim: &mut ProgressSimulator<FrameQueue>, now: Duration) {
        let due = sim.scheduler_mut().take_due(now);
        for handle in due {
            sim.on_frame(handle, now);
        }
    }

    /// Step `clock` one frame at a time up to `to`, pumping after each step.
    fn run_frames(sim: &mut ProgressSimulator<FrameQueue>, clock: &ManualClock, to: u64) {
        while clock.now() < ms(to) {
            clock.advance(ms(16).min(ms(to) - clock.now()));
            pump(sim, clock.now());
        }
    }

    #[test]
    fn test_idle_until_full_screen() {
        let tracks = tracks_with_durations(&["3:05"]);
        let mut sim = simulator();
        sim.select_track(&tracks, 0, ms(0)).unwrap();
        assert_eq!(sim.phase(), Phase::Idle);
        assert_eq!(sim.scheduler().pending(), 0);
        assert_eq!(sim.state().duration_secs, 185);
    }

    #[test]
    fn test_full_cycle_then_loop() {
        let tracks = tracks_with_durations(&["3:05"]);
        let mut sim = simulator();
        let clock = ManualClock::new();
        sim.enter_full_screen(&tracks, clock.now()).unwrap();

        run_frames(&mut sim, &clock, 92_500);
        assert_eq!(sim.state().elapsed_secs, 92);
        assert!((sim.state().progress - 0.5).abs() < 0.01);

        run_frames(&mut sim, &clock, 184_000);
        pump(&mut sim, ms(185_000));
        assert_eq!(sim.state().progress, 1.0);
        assert_eq!(sim.state().elapsed_secs, 185);
        assert_eq!(sim.state().remaining_secs(), 0);
        assert_eq!(sim.phase(), Phase::Looping);

        // Still paused just before the second elapses
        pump(&mut sim, ms(185_999));
        assert_eq!(sim.state().elapsed_secs, 185);

        pump(&mut sim, ms(186_000));
        assert_eq!(sim.state().elapsed_secs, 0);
        assert_eq!(sim.state().progress, 0.0);
        assert_eq!(sim.phase(), Phase::Running { started: ms(186_000) });
    }

    #[test]
    fn test_progress_follows_wall_clock_not_frames() {
        let tracks = tracks_with_durations(&["1:40"]);
        let mut sim = simulator();
        sim.enter_full_screen(&tracks, ms(0)).unwrap();

        // One late frame covers a long stall
        pump(&mut sim, ms(25_000));
        assert_eq!(sim.state().elapsed_secs, 25);
        assert!((sim.state().progress - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_never_divides() {
        let tracks = tracks_with_durations(&[""]);
        let mut sim = simulator();
        sim.enter_full_screen(&tracks, ms(0)).unwrap();

        assert_eq!(sim.state().duration_secs, 0);
        assert_eq!(sim.state().progress, 1.0);
        assert_eq!(sim.state().elapsed_secs, 0);
        assert_eq!(sim.phase(), Phase::Complete);
        assert_eq!(sim.scheduler().pending(), 0);
        assert!(sim.state().progress.is_finite());
    }

    #[test]
    fn test_huge_duration_label_stays_in_range() {
        let tracks = tracks_with_durations(&["99999999999999999:00"]);
        let mut sim = simulator();
        sim.enter_full_screen(&tracks, ms(0)).unwrap();
        pump(&mut sim, ms(16));

        let progress = sim.state().progress;
        assert!((0.0..=1.0).contains(&progress));
        assert_eq!(sim.state().elapsed_secs, 0);
        assert!(matches!(sim.phase(), Phase::Running { .. }));
        assert_eq!(sim.scheduler().pending(), 1);
    }

    #[test]
    fn test_select_while_full_screen_restarts() {
        let tracks = tracks_with_durations(&["3:05", "2:00"]);
        let mut sim = simulator();
        let clock = ManualClock::new();
        sim.enter_full_screen(&tracks, clock.now()).unwrap();
        run_frames(&mut sim, &clock, 30_000);
        assert_eq!(sim.state().elapsed_secs, 30);

        sim.select_track(&tracks, 1, clock.now()).unwrap();
        assert_eq!(sim.state().elapsed_secs, 0);
        assert_eq!(sim.state().progress, 0.0);
        assert_eq!(sim.state().duration_secs, 120);
        assert_eq!(sim.scheduler().pending(), 1);

        run_frames(&mut sim, &clock, 40_000);
        assert_eq!(sim.state().elapsed_secs, 10);
    }

    #[test]
    fn test_select_out_of_range_rejected() {
        let tracks = tracks_with_durations(&["3:05"]);
        let mut sim = simulator();
        let err = sim.select_track(&tracks, 3, ms(0)).unwrap_err();
        assert_eq!(err, PlaybackError::TrackOutOfRange { index: 3, len: 1 });
        assert_eq!(sim.state().selected, 0);
    }

    #[test]
    fn test_enter_full_screen_with_empty_list() {
        let mut sim = simulator();
        assert!(sim.enter_full_screen(&[], ms(0)).is_err());
        assert!(!sim.state().full_screen);
    }

    #[test]
    fn test_exit_cancels_pending_frame() {
        let tracks = vec![mock_track()];
        let mut sim = simulator();
        let clock = ManualClock::new();
        sim.enter_full_screen(&tracks, clock.now()).unwrap();
        run_frames(&mut sim, &clock, 8_000);
        let stale = sim.pending().unwrap();

        sim.exit_full_screen();
        assert_eq!(sim.phase(), Phase::Idle);
        assert_eq!(sim.scheduler().pending(), 0);
        assert!(!sim.on_frame(stale, ms(9_000)));
        assert_eq!(sim.state().elapsed_secs, 8);
    }

    #[test]
    fn test_reenter_full_screen_resets() {
        let tracks = vec![mock_track()];
        let mut sim = simulator();
        let clock = ManualClock::new();
        sim.enter_full_screen(&tracks, clock.now()).unwrap();
        run_frames(&mut sim, &clock, 10_000);
        sim.exit_full_screen();

        clock.set(ms(20_000));
        sim.enter_full_screen(&tracks, clock.now()).unwrap();
        assert_eq!(sim.state().elapsed_secs, 0);
        run_frames(&mut sim, &clock, 24_000);
        assert_eq!(sim.state().elapsed_secs, 4);
    }

    #[test]
    fn test_single_pending_handle() {
        let tracks = tracks_with_durations(&["3:05", "2:00"]);
        let mut sim = simulator();
        sim.enter_full_screen(&tracks, ms(0)).unwrap();
        sim.select_track(&tracks, 1, ms(0)).unwrap();
        sim.enter_full_screen(&tracks, ms(0)).unwrap();
        assert_eq!(sim.scheduler().pending(), 1);
    }

    #[test]
    fn test_elapsed_matches_progress() {
        let tracks = tracks_with_durations(&["3:05"]);
        let mut sim = simulator();
        sim.enter_full_screen(&tracks, ms(0)).unwrap();
        for stop in [1_000u64, 47_300, 120_016, 184_990] {
            pump(&mut sim, ms(stop));
            let state = sim.state();
            let expected = state.progress * state.duration_secs as f64;
            assert!((expected - state.elapsed_secs as f64).abs() < 1.0);
        }
    }
}
