//! In-memory world oracle.
//!
//! Hosts with their own world storage implement
//! [`compass_core::WorldOracle`] directly; [`VoxelWorld`] serves tests,
//! tools and the CLI demo.
mod world;

pub use world::VoxelWorld;
