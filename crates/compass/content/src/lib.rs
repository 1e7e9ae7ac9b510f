//! Data-driven compass content.
//!
//! Material catalogs are authored in RON and detection settings in TOML.
//! Loaders turn both into validated `compass-core` values; nothing here is
//! consulted once the host has built its catalog and configuration.
//!
//! Bundled defaults live under `data/` and are embedded with
//! [`include_str!`] so hosts work without any files on disk.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, MaterialSpec};

/// Bundled standard catalog, equivalent to `MaterialCatalog::standard()`.
pub const STANDARD_CATALOG_RON: &str = include_str!("../data/materials.ron");

/// Bundled default configuration.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../data/compass.toml");
