//! Read-only views of the world consumed by the core.
//!
//! Oracles must be side-effect free from the core's perspective: the
//! scanner may call [`WorldOracle::block_at`] millions of times per scan and
//! expects the same answer for the same position within one call.
use crate::catalog::BlockId;
use crate::state::Position;

/// Block content lookup.
pub trait WorldOracle {
    fn block_at(&self, position: Position) -> BlockId;
}

impl<W: WorldOracle + ?Sized> WorldOracle for &W {
    fn block_at(&self, position: Position) -> BlockId {
        (**self).block_at(position)
    }
}

/// Where the tool holder stands and which way it faces.
pub trait HolderOracle {
    /// Block the holder occupies; the scan is centred here.
    fn position(&self) -> Position;

    /// Yaw in degrees, host convention (0 = south, 90 = west, 180 = north).
    fn facing(&self) -> f64;

    /// Exact horizontal `(x, z)` location, used for bearings. Defaults to the
    /// centre of [`HolderOracle::position`].
    fn exact_xz(&self) -> (f64, f64) {
        let position = self.position();
        (f64::from(position.x) + 0.5, f64::from(position.z) + 0.5)
    }
}

/// Plain-data holder, handy for hosts and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedHolder {
    pub position: Position,
    pub facing: f64,
}

impl FixedHolder {
    pub const fn new(position: Position, facing: f64) -> Self {
        Self { position, facing }
    }
}

impl HolderOracle for FixedHolder {
    fn position(&self) -> Position {
        self.position
    }

    fn facing(&self) -> f64 {
        self.facing
    }
}
