//! Sidebar layout engine.
//!
//! - [`panel`]: width/collapse state machine driven by resize drags
//! - [`capture`]: gesture-scoped global pointer capture

pub mod capture;
pub mod panel;

pub use capture::{CaptureTracker, NoCapture, PointerCapture, TrackedCapture};
pub use panel::{PanelConfig, PanelController, PanelMode, PanelState};

/// Errors from building a panel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid panel geometry: {0}")]
    InvalidConfig(String),
}
