//! Errors surfaced by the runtime API.
//!
//! Detection never fails; these cover host mistakes (unknown tool ids,
//! unknown materials), malformed stored records and tool store I/O.
use compass_core::{ConfigError, ToolId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("tool {0} is not registered")]
    UnknownTool(ToolId),

    #[error("material '{0}' is not in the catalog")]
    UnknownMaterial(String),

    #[error("invalid configuration")]
    InvalidConfig(#[from] ConfigError),

    #[error("malformed tool record")]
    Record(#[source] serde_json::Error),

    #[error("tool store I/O failed")]
    Io(#[from] std::io::Error),
}
