//! Gesture-scoped pointer capture.
//!
//! While a resize drag is active the sidebar needs every pointer move and
//! the final release, wherever they happen in the window. Capture is
//! modelled as a guard: acquiring it starts global delivery, dropping it
//! stops delivery. The guard lives inside the drag session, so every way a
//! drag can end (release, cancel, toggle, teardown, unwinding) releases it.

use std::cell::Cell;
use std::rc::Rc;

/// Source of global pointer capture.
pub trait PointerCapture {
    /// Held for the duration of one gesture. Dropping it releases capture.
    type Guard;

    /// Start routing global pointer moves/releases to the panel.
    fn acquire(&self) -> Self::Guard;
}

/// Capture for hosts that already deliver global pointer events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    type Guard = ();

    fn acquire(&self) -> Self::Guard {}
}

/// Capture that counts live and total acquisitions.
///
/// Clones share the same counters, so a host can keep one handle and
/// hand another to the panel controller.
#[derive(Debug, Clone, Default)]
pub struct CaptureTracker {
    counts: Rc<CaptureCounts>,
}

#[derive(Debug, Default)]
struct CaptureCounts {
    active: Cell<u32>,
    acquired: Cell<u32>,
}

impl CaptureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of guards currently alive.
    pub fn active(&self) -> u32 {
        self.counts.active.get()
    }

    /// Number of guards ever handed out.
    pub fn acquired(&self) -> u32 {
        self.counts.acquired.get()
    }
}

impl PointerCapture for CaptureTracker {
    type Guard = TrackedCapture;

    fn acquire(&self) -> TrackedCapture {
        let counts = &self.counts;
        counts.active.set(counts.active.get() + 1);
        counts.acquired.set(counts.acquired.get() + 1);
        tracing::debug!(active = counts.active.get(), "pointer capture acquired");
        TrackedCapture {
            counts: Rc::clone(&self.counts),
        }
    }
}

/// Guard returned by [`CaptureTracker`].
#[derive(Debug)]
pub struct TrackedCapture {
    counts: Rc<CaptureCounts>,
}

impl Drop for TrackedCapture {
    fn drop(&mut self) {
        let active = self.counts.active.get().saturating_sub(1);
        self.counts.active.set(active);
        tracing::debug!(active, "pointer capture released");
    }
}
