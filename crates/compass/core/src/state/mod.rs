//! Per-tool state and the small value types shared across the crate.
//!
//! [`ToolState`] is the only mutable record the core knows about. It travels
//! with a tool instance, is written by [`crate::tracking::Tracker`] and read by
//! presentation code. Hosts that need a storage format use [`ToolRecord`]
//! (behind the `serde` feature), which keeps the flat key-value shape.
mod common;
#[cfg(feature = "serde")]
mod record;
mod tool;

pub use common::{Position, Tick, ToolId};
#[cfg(feature = "serde")]
pub use record::ToolRecord;
pub use tool::{ToolState, TrackingMode};
