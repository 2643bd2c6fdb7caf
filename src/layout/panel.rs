//! Sidebar panel controller.
//!
//! Turns horizontal pointer positions from a resize drag into a sidebar
//! width and a collapsed flag. The committed state is a single tagged
//! [`PanelMode`]; while a drag has moved, the live width lives in the drag
//! session and `collapsed` is derived from it, so the two can never
//! disagree.

use serde::{Deserialize, Serialize};

use super::capture::{NoCapture, PointerCapture};
use super::LayoutError;

/// Fixed geometry of a panel, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Narrowest width a drag can reach
    pub min_width: u32,
    /// Widest width a drag can reach
    pub max_width: u32,
    /// Widths below this collapse to icon-only mode
    pub collapse_threshold: u32,
    /// Width used whenever collapsed
    pub collapsed_width: u32,
    /// Default width, and the snap target after a drag
    pub expanded_width: u32,
    /// A drag ending closer than this to `expanded_width` snaps to it
    pub snap_distance: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_width: 80,
            max_width: 500,
            collapse_threshold: 300,
            collapsed_width: 64,
            expanded_width: 400,
            snap_distance: 50,
        }
    }
}

impl PanelConfig {
    /// Check the ordering `min <= threshold <= expanded <= max`.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.collapsed_width == 0 {
            return Err(LayoutError::InvalidConfig(
                "collapsed_width must be positive".to_string(),
            ));
        }
        if self.min_width > self.max_width {
            return Err(LayoutError::InvalidConfig(format!(
                "min_width {} exceeds max_width {}",
                self.min_width, self.max_width
            )));
        }
        if !(self.min_width..=self.max_width).contains(&self.collapse_threshold) {
            return Err(LayoutError::InvalidConfig(format!(
                "collapse_threshold {} outside {}..={}",
                self.collapse_threshold, self.min_width, self.max_width
            )));
        }
        if !(self.collapse_threshold..=self.max_width).contains(&self.expanded_width) {
            return Err(LayoutError::InvalidConfig(format!(
                "expanded_width {} outside {}..={}",
                self.expanded_width, self.collapse_threshold, self.max_width
            )));
        }
        Ok(())
    }

    /// Clamp a pointer x coordinate into `[min_width, max_width]`.
    pub fn clamp(&self, pointer_x: i32) -> u32 {
        let x = i64::from(pointer_x);
        x.clamp(i64::from(self.min_width), i64::from(self.max_width)) as u32
    }

    fn snap(&self, width: u32) -> u32 {
        if width.abs_diff(self.expanded_width) < self.snap_distance {
            self.expanded_width
        } else {
            width
        }
    }
}

/// Committed panel state between gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Expanded { width: u32 },
    /// `restore` is the width a toggle brings back
    Collapsed { restore: u32 },
}

/// Observable state, suitable for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub width: u32,
    pub collapsed: bool,
    pub resizing: bool,
}

struct DragSession<G> {
    /// Clamped pointer width, once the pointer has moved
    width: Option<u32>,
    _capture: G,
}

/// Resizable, collapsible sidebar.
pub struct PanelController<C: PointerCapture = NoCapture> {
    config: PanelConfig,
    mode: PanelMode,
    drag: Option<DragSession<C::Guard>>,
    capture: C,
}

#[cfg(test)]
impl PanelController<NoCapture> {
    /// Controller with default geometry and no global capture.
    pub fn with_defaults() -> Self {
        Self {
            config: PanelConfig::default(),
            mode: PanelMode::Expanded {
                width: PanelConfig::default().expanded_width,
            },
            drag: None,
            capture: NoCapture,
        }
    }
}

impl<C: PointerCapture> PanelController<C> {
    /// Create an expanded panel at the default width.
    pub fn new(config: PanelConfig, capture: C) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            mode: PanelMode::Expanded {
                width: config.expanded_width,
            },
            config,
            drag: None,
            capture,
        })
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Last committed mode (ignores an in-flight drag).
    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    /// Current width, including the live width of a drag.
    pub fn width(&self) -> u32 {
        if let Some(width) = self.drag.as_ref().and_then(|d| d.width) {
            return width;
        }
        match self.mode {
            PanelMode::Expanded { width } => width,
            PanelMode::Collapsed { .. } => self.config.collapsed_width,
        }
    }

    /// Icon-only mode, derived live during a drag.
    pub fn is_collapsed(&self) -> bool {
        match self.drag.as_ref().and_then(|d| d.width) {
            Some(width) => width < self.config.collapse_threshold,
            None => matches!(self.mode, PanelMode::Collapsed { .. }),
        }
    }

    pub fn state(&self) -> PanelState {
        PanelState {
            width: self.width(),
            collapsed: self.is_collapsed(),
            resizing: self.is_resizing(),
        }
    }

    /// Pointer pressed on the resize handle.
    ///
    /// Returns `false` if a drag is already active; the existing capture is
    /// kept and no second one is acquired.
    pub fn begin_resize(&mut self) -> bool {
        if self.drag.is_some() {
            tracing::debug!("begin_resize ignored: drag already active");
            return false;
        }
        self.drag = Some(DragSession {
            width: None,
            _capture: self.capture.acquire(),
        });
        true
    }

    /// Pointer moved to `pointer_x` (window coordinates).
    pub fn on_pointer_move(&mut self, pointer_x: i32) {
        let width = self.config.clamp(pointer_x);
        if let Some(drag) = self.drag.as_mut() {
            drag.width = Some(width);
        }
    }

    /// Pointer released: drop capture, then collapse or snap.
    pub fn end_resize(&mut self) -> PanelMode {
        let Some(drag) = self.drag.take() else {
            return self.mode;
        };
        let width = drag.width.unwrap_or_else(|| self.width());
        drop(drag);

        self.mode = if width < self.config.collapse_threshold {
            PanelMode::Collapsed {
                restore: self.config.expanded_width,
            }
        } else {
            PanelMode::Expanded {
                width: self.config.snap(width),
            }
        };
        tracing::debug!(mode = ?self.mode, "resize finished");
        self.mode
    }

    /// Gesture aborted (pointer cancel, focus loss): keep the committed mode.
    pub fn cancel_resize(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!(mode = ?self.mode, "resize cancelled");
        }
    }

    /// Flip between collapsed and expanded.
    ///
    /// Cancels an in-flight drag first. Collapsing remembers the width so a
    /// second toggle restores it.
    pub fn toggle(&mut self) -> PanelMode {
        self.cancel_resize();
        self.mode = match self.mode {
            PanelMode::Expanded { width } => PanelMode::Collapsed { restore: width },
            PanelMode::Collapsed { restore } => PanelMode::Expanded { width: restore },
        };
        self.mode
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Width never leaves [min, max] after a move
        #[test]
        fn move_stays_in_bounds(xs in prop::collection::vec(any::<i32>(), 1..20)) {
            let mut panel = PanelController::with_defaults();
            let config = *panel.config();
            panel.begin_resize();
            for x in xs {
                panel.on_pointer_move(x);
                prop_assert!(panel.width() >= config.min_width);
                prop_assert!(panel.width() <= config.max_width);
            }
        }

        /// Ending below the threshold always lands collapsed at the fixed width
        #[test]
        fn end_below_threshold_collapses(x in -1000i32..300) {
            let mut panel = PanelController::with_defaults();
            panel.begin_resize();
            panel.on_pointer_move(x);
            panel.end_resize();
            prop_assert!(panel.is_collapsed());
            prop_assert_eq!(panel.width(), panel.config().collapsed_width);
        }

        /// Ending near the default width snaps exactly onto it
        #[test]
        fn end_near_default_snaps(x in 351i32..450) {
            let mut panel = PanelController::with_defaults();
            panel.begin_resize();
            panel.on_pointer_move(x);
            panel.end_resize();
            prop_assert!(!panel.is_collapsed());
            prop_assert_eq!(panel.width(), 400);
        }

        /// Two toggles restore the previous observable state
        #[test]
        fn toggle_is_involution(x in -100i32..700, collapse_first in any::<bool>()) {
            let mut panel = PanelController::with_defaults();
            panel.begin_resize();
            panel.on_pointer_move(x);
            panel.end_resize();
            if collapse_first {
                panel.toggle();
            }
            let before = panel.state();
            panel.toggle();
            panel.toggle();
            prop_assert_eq!(panel.state(), before);
        }
    }
}
