//! Boundary errors for compass-core.
//!
//! Detection itself never fails: "nothing found" is `None` and an unknown
//! tuning id degrades to untuned detection. Errors exist only where external
//! data enters the crate, i.e. catalog construction and configuration.

use crate::catalog::MaterialId;

/// Invalid material table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two materials share one id.
    #[error("material id '{0}' is defined more than once")]
    DuplicateId(MaterialId),

    /// A material lists no blocks and could never match.
    #[error("material '{0}' has no block identities")]
    EmptyBlockSet(MaterialId),

    /// A data file names a block the palette does not know.
    #[error("material '{material}' references unknown block '{block}'")]
    UnknownBlock { material: MaterialId, block: String },
}

impl CatalogError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateId(_) => "CATALOG_DUPLICATE_ID",
            Self::EmptyBlockSet(_) => "CATALOG_EMPTY_BLOCK_SET",
            Self::UnknownBlock { .. } => "CATALOG_UNKNOWN_BLOCK",
        }
    }
}

/// Configuration option outside its documented range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{option} = {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        option: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

impl ConfigError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "CONFIG_OUT_OF_RANGE",
        }
    }
}
