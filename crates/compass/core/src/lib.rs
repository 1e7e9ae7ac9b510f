//! Deterministic detection logic for proximity compasses.
//!
//! `compass-core` owns the rules: which materials a tool can sense, how the
//! surrounding cube is scanned, how a tool's remembered target is kept in sync
//! with the world, and how the needle turns a bearing into smooth motion.
//! Everything here is a pure function of its inputs and the read-only
//! oracles in [`env`]; hosts drive it from their own tick and frame loops.
pub mod catalog;
pub mod config;
pub mod env;
pub mod error;
pub mod needle;
pub mod presentation;
pub mod scan;
pub mod state;
pub mod tracking;
pub mod tuning;

pub use catalog::{BlockId, BlockPalette, Material, MaterialCatalog, MaterialId, Rgb};
pub use config::{CompassConfig, ToolSpec, ToolTier};
pub use env::{FixedHolder, HolderOracle, WorldOracle};
pub use error::{CatalogError, ConfigError};
pub use needle::{NeedleAnimator, NeedleReading, WobbleState};
pub use presentation::{Severity, StatusMessage};
pub use scan::{CubeScan, ScanHit};
pub use state::{Position, Tick, ToolId, ToolState, TrackingMode};
pub use tracking::{Revalidation, Tracker, TrackingOutcome, Transition, UpdateSchedule};
pub use tuning::{GridItem, TuningRecipe};

#[cfg(feature = "serde")]
pub use state::ToolRecord;
