//! Simulated playback.
//!
//! Nothing is decoded or played. This module provides:
//! - [`ProgressSimulator`]: elapsed/progress for the selected track, looping
//! - [`FrameScheduler`] / [`FrameQueue`]: cancellable frame and timer handles
//! - [`Clock`]: wall-clock or hand-stepped time sources
//! - [`PlaybackState`]: the values both player views render

pub mod clock;
pub mod scheduler;
pub mod simulator;
pub mod state;

pub use clock::{Clock, SystemClock};
pub use scheduler::{DEFAULT_FRAME_INTERVAL, FrameHandle, FrameQueue, FrameScheduler};
pub use simulator::{DEFAULT_LOOP_PAUSE, Phase, ProgressSimulator};
pub use state::PlaybackState;

/// Errors from driving the simulator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("Track {index} out of range (list has {len})")]
    TrackOutOfRange { index: usize, len: usize },
}
