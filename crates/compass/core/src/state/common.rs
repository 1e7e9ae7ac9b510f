use std::fmt;

/// Stable identity of a tool instance held by the host.
///
/// Animator and tracking state are keyed by this value, never by tool kind,
/// so two compasses of the same tier never share needle motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolId(pub u32);

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Integer block position in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Squared Euclidean distance, computed in `i64`.
    pub fn distance_squared(self, other: Position) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        let dz = i64::from(other.z) - i64::from(self.z);
        dx * dx + dy * dy + dz * dz
    }

    /// Euclidean distance, for display only.
    pub fn distance(self, other: Position) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// World-time tick as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_squared_is_symmetric() {
        let a = Position::new(3, -4, 12);
        let b = Position::new(-1, 0, 2);
        assert_eq!(a.distance_squared(b), 16 + 16 + 100);
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
    }

    #[test]
    fn distance_squared_does_not_overflow_at_world_border() {
        let a = Position::new(30_000_000, 0, 30_000_000);
        let b = Position::new(-30_000_000, 0, -30_000_000);
        let span: i64 = 60_000_000;
        assert_eq!(a.distance_squared(b), 2 * span * span);
    }

    #[test]
    fn offset_moves_each_axis() {
        assert_eq!(
            Position::new(1, 2, 3).offset(-1, 0, 4),
            Position::new(0, 2, 7)
        );
    }
}
