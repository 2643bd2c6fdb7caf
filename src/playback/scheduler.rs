//! Cancellable frame scheduling.
//!
//! The simulator never keeps a callback alive on its own: it asks a
//! [`FrameScheduler`] for a handle and the host delivers the handle back
//! when it is due. Cancelling a handle guarantees it is never delivered.

use std::collections::BTreeSet;
use std::time::Duration;

/// Identifies one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

pub trait FrameScheduler {
    /// Schedule a callback for the next animation frame.
    fn request_frame(&mut self, now: Duration) -> FrameHandle;

    /// Schedule a one-shot callback `delay` after `now`.
    fn schedule_after(&mut self, now: Duration, delay: Duration) -> FrameHandle;

    /// Drop a scheduled callback. Returns `false` if it was not pending.
    fn cancel(&mut self, handle: FrameHandle) -> bool;
}

/// Deadline-ordered scheduler polled by the host loop.
#[derive(Debug)]
pub struct FrameQueue {
    frame_interval: Duration,
    next_id: u64,
    pending: BTreeSet<(Duration, FrameHandle)>,
}

/// ~60 frames per second
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl FrameQueue {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            next_id: 0,
            pending: BTreeSet::new(),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Number of callbacks still scheduled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Earliest deadline, if anything is scheduled.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.first().map(|(at, _)| *at)
    }

    /// Remove and return every handle due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Duration) -> Vec<FrameHandle> {
        let later = self.pending.split_off(&(now, FrameHandle(u64::MAX)));
        let due = std::mem::replace(&mut self.pending, later);
        due.into_iter().map(|(_, handle)| handle).collect()
    }

    fn insert(&mut self, at: Duration) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.insert((at, handle));
        handle
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self, now: Duration) -> FrameHandle {
        self.insert(now + self.frame_interval)
    }

    fn schedule_after(&mut self, now: Duration, delay: Duration) -> FrameHandle {
        self.insert(now + delay)
    }

    fn cancel(&mut self, handle: FrameHandle) -> bool {
        let key = self.pending.iter().find(|(_, h)| *h == handle).copied();
        key.is_some_and(|key| self.pending.remove(&key))
    }
}
