//! Host-side driver for compass tools.
//!
//! The runtime owns one [`ToolInstance`] per tool in play, each with its own
//! persisted state and its own needle animator. Hosts forward world ticks,
//! tool uses and render requests; the runtime decides when to scan, logs
//! what changed, and returns ready-to-draw [`NeedleFrame`]s.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`tools`] keeps the per-instance arena
//! - [`events`] describes target changes reported to the host
//! - [`persistence`] encodes tool state as flat JSON records
//! - [`oracle`] provides an in-memory world for hosts and tests
pub mod error;
pub mod events;
pub mod frame;
pub mod oracle;
pub mod persistence;
pub mod runtime;
pub mod tools;

pub use error::{Result, RuntimeError};
pub use events::CompassEvent;
pub use frame::{NeedleFrame, UseReport};
pub use oracle::VoxelWorld;
pub use persistence::FileToolStore;
pub use runtime::{CompassRuntime, RuntimeBuilder};
pub use tools::{ToolInstance, ToolRegistry};
