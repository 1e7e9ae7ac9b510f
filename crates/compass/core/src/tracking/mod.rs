//! Keeps a tool's remembered target in sync with the world.
//!
//! Each trigger (scheduled tick or forced use) runs the same three steps:
//! revalidate the remembered target, search the cube, commit the result.
//! Nothing here can fail; an empty search is a normal outcome.
mod schedule;
mod tracker;

pub use schedule::UpdateSchedule;
pub use tracker::{Revalidation, Tracker, TrackingOutcome, Transition, tune, untune};
