//! Needle motion: bearings and the damped-oscillator wobble.
//!
//! The animator runs on the render cadence, independently of scans. It reads
//! only the tool's current target (or its absence) and the world tick.
mod bearing;
mod wobble;

pub use bearing::{bearing_to_target, relative_bearing, wrap_degrees, wrap_signed_degrees};
pub use wobble::{NeedleAnimator, NeedleReading, WobbleState};
