use crate::state::Position;

/// Every position of the cube `origin + [-radius, radius]³`, in scan order.
///
/// `x` is the outer loop, `z` the inner one; all ascend. Offsets that would
/// leave the `i32` coordinate space are clipped, so a cube near the edge of
/// the world is smaller but never wraps to the other side.
#[derive(Clone, Debug)]
pub struct CubeScan {
    min: Position,
    max: Position,
    cursor: Position,
    remaining: usize,
}

impl CubeScan {
    pub fn new(origin: Position, radius: u32) -> Self {
        let radius = i64::from(radius);
        let (min_x, max_x) = axis_bounds(origin.x, radius);
        let (min_y, max_y) = axis_bounds(origin.y, radius);
        let (min_z, max_z) = axis_bounds(origin.z, radius);
        let min = Position::new(min_x, min_y, min_z);
        Self {
            min,
            max: Position::new(max_x, max_y, max_z),
            cursor: min,
            remaining: span(min_x, max_x)
                .saturating_mul(span(min_y, max_y))
                .saturating_mul(span(min_z, max_z)),
        }
    }

    /// Number of positions an unclipped cube of `radius` contains: `(2r + 1)³`.
    pub fn volume(radius: u32) -> usize {
        let side = 2 * radius as usize + 1;
        side * side * side
    }
}

/// Inclusive `[center - radius, center + radius]`, clipped to `i32`.
fn axis_bounds(center: i32, radius: i64) -> (i32, i32) {
    let center = i64::from(center);
    let low = (center - radius).max(i64::from(i32::MIN));
    let high = (center + radius).min(i64::from(i32::MAX));
    // Both ends are within i32 after clipping.
    (low as i32, high as i32)
}

fn span(low: i32, high: i32) -> usize {
    (i64::from(high) - i64::from(low) + 1) as usize
}

impl Iterator for CubeScan {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.remaining == 0 {
            return None;
        }
        let position = self.cursor;
        self.remaining -= 1;
        // The cursor only moves while positions remain, so it never steps
        // past `max`.
        if self.remaining > 0 {
            if self.cursor.z < self.max.z {
                self.cursor.z += 1;
            } else {
                self.cursor.z = self.min.z;
                if self.cursor.y < self.max.y {
                    self.cursor.y += 1;
                } else {
                    self.cursor.y = self.min.y;
                    self.cursor.x += 1;
                }
            }
        }
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CubeScan {}

impl std::iter::FusedIterator for CubeScan {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn visits_every_offset_exactly_once() {
        for radius in 0..=4u32 {
            let origin = Position::new(7, -3, 12);
            let seen: Vec<_> = CubeScan::new(origin, radius).collect();
            let unique: HashSet<_> = seen.iter().copied().collect();
            assert_eq!(seen.len(), CubeScan::volume(radius));
            assert_eq!(unique.len(), seen.len());

            let r = radius as i32;
            assert!(seen.iter().all(|p| {
                (p.x - origin.x).abs() <= r
                    && (p.y - origin.y).abs() <= r
                    && (p.z - origin.z).abs() <= r
            }));
        }
    }

    #[test]
    fn order_is_dx_then_dy_then_dz() {
        let order: Vec<_> = CubeScan::new(Position::ORIGIN, 1).take(5).collect();
        assert_eq!(
            order,
            [
                Position::new(-1, -1, -1),
                Position::new(-1, -1, 0),
                Position::new(-1, -1, 1),
                Position::new(-1, 0, -1),
                Position::new(-1, 0, 0),
            ]
        );
        assert_eq!(
            CubeScan::new(Position::ORIGIN, 1).last(),
            Some(Position::new(1, 1, 1))
        );
    }

    #[test]
    fn radius_zero_is_the_origin() {
        let origin = Position::new(5, 5, 5);
        assert_eq!(CubeScan::new(origin, 0).collect::<Vec<_>>(), [origin]);
    }

    #[test]
    fn reports_exact_length() {
        let scan = CubeScan::new(Position::ORIGIN, 8);
        assert_eq!(scan.len(), 17 * 17 * 17);
    }

    #[test]
    fn clips_at_the_edge_of_coordinate_space() {
        let origin = Position::new(i32::MAX - 3, 0, i32::MIN + 1);
        let seen: Vec<_> = CubeScan::new(origin, 16).collect();

        // x: MAX-19..=MAX, y: -16..=16, z: MIN..=MIN+17
        assert_eq!(seen.len(), 20 * 33 * 18);
        assert_eq!(seen.first(), Some(&Position::new(i32::MAX - 19, -16, i32::MIN)));
        assert_eq!(seen.last(), Some(&Position::new(i32::MAX, 16, i32::MIN + 17)));
        assert!(seen.iter().all(|p| p.x >= i32::MAX - 19 && p.z <= i32::MIN + 17));
    }
}
