//! Ready-to-draw outputs for presentation glue.
use compass_core::{Rgb, StatusMessage, TrackingOutcome};

/// Everything needed to draw one compass for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct NeedleFrame {
    /// Needle position in `[0, 1)`.
    pub fraction: f32,
    pub color: Rgb,
    /// HUD text, present only while tracking.
    pub label: Option<String>,
    pub foil: bool,
}

/// Result of the holder using a tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UseReport {
    pub outcome: TrackingOutcome,
    pub message: StatusMessage,
}
