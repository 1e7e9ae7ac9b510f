use crate::env::HolderOracle;
use crate::state::Position;

/// Wraps any angle into `[0, 360)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest signed difference, wrapped into `[-180, 180]`.
pub fn wrap_signed_degrees(angle: f64) -> f64 {
    let mut diff = angle % 360.0;
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff < -180.0 {
        diff += 360.0;
    }
    diff
}

/// Absolute yaw from the holder to the centre of `target`, in `[0, 360)`.
///
/// Uses the host's yaw convention: 0 = south (+z), 90 = west (-x),
/// 180 = north (-z), 270 = east (+x).
pub fn bearing_to_target<H>(holder: &H, target: Position) -> f64
where
    H: HolderOracle + ?Sized,
{
    let (x, z) = holder.exact_xz();
    let dx = f64::from(target.x) + 0.5 - x;
    let dz = f64::from(target.z) + 0.5 - z;
    wrap_degrees((-dx).atan2(dz).to_degrees())
}

/// Bearing relative to where the holder faces, in `[0, 360)`.
pub fn relative_bearing(absolute: f64, facing: f64) -> f64 {
    wrap_degrees(absolute - facing)
}
