//! Exhaustive cube scanning and best-match selection.
//!
//! The scan visits every integer offset in `[-radius, radius]³` in a fixed
//! order: `dx` outermost, then `dy`, then `dz`, all ascending. That order is
//! part of the contract because it decides full ties. There is no distance
//! cutoff and no acceleration structure; results must stay exact. Near the
//! edge of the `i32` coordinate space the cube is clipped, never wrapped.
mod cube;

pub use cube::CubeScan;

use crate::catalog::Material;
use crate::env::WorldOracle;
use crate::state::Position;

/// Winning position of a scan and the material that matched there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanHit<'c> {
    pub position: Position,
    pub material: &'c Material,
    /// Squared distance from the scan origin.
    pub distance_squared: i64,
}

/// First candidate, in the order supplied, matching the block at `position`.
#[inline]
pub fn first_match<'c, W>(
    world: &W,
    position: Position,
    candidates: &[&'c Material],
) -> Option<&'c Material>
where
    W: WorldOracle + ?Sized,
{
    let block = world.block_at(position);
    candidates.iter().copied().find(|m| m.matches(block))
}

/// Finds the best match in the cube of half-width `radius` around `origin`.
///
/// A candidate replaces the current best when its priority is strictly lower,
/// or when priorities are equal and it is strictly closer. Full ties keep the
/// earlier position in scan order.
pub fn find_best<'c, W>(
    world: &W,
    origin: Position,
    radius: u32,
    candidates: &[&'c Material],
) -> Option<ScanHit<'c>>
where
    W: WorldOracle + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }

    let mut best: Option<ScanHit<'c>> = None;
    for position in CubeScan::new(origin, radius) {
        let Some(material) = first_match(world, position, candidates) else {
            continue;
        };
        let distance_squared = origin.distance_squared(position);
        let replaces = match &best {
            None => true,
            Some(current) => {
                material.priority() < current.material.priority()
                    || (material.priority() == current.material.priority()
                        && distance_squared < current.distance_squared)
            }
        };
        if replaces {
            best = Some(ScanHit {
                position,
                material,
                distance_squared,
            });
        }
    }
    best
}

/// Number of positions in the cube matching any candidate.
pub fn count_matches<W>(
    world: &W,
    origin: Position,
    radius: u32,
    candidates: &[&Material],
) -> usize
where
    W: WorldOracle + ?Sized,
{
    if candidates.is_empty() {
        return 0;
    }
    CubeScan::new(origin, radius)
        .filter(|&position| first_match(world, position, candidates).is_some())
        .count()
}
