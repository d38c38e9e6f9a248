use std::f64::consts::PI;

use crate::chart::geometry::Point;
use crate::chart::{DIMENSION_COUNT, SLICE_ANGLE, START_ANGLE};

/// Maps a pointer position back to the dimension slice under it, or `None`
/// when the pointer is outside the interactive region.
///
/// Zones are centered on each axis, not bounded by it: the pointer angle is
/// shifted by half a slice before bucketing, so zone 0 spans the half slice
/// either side of straight up. This matches the wedge clips drawn by the
/// renderer; the two must never diverge or hover highlighting would target
/// a different slice than clicking.
pub fn hit_test(
    pointer: Point,
    center: Point,
    max_radius: f64,
    tolerance: f64,
) -> Option<usize> {
    if pointer.distance(center) > max_radius + tolerance {
        return None;
    }

    let offset = START_ANGLE - SLICE_ANGLE / 2.0;
    let normalized = (pointer.angle_from(center) - offset).rem_euclid(2.0 * PI);

    Some((normalized / SLICE_ANGLE) as usize % DIMENSION_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::geometry::{axis_angle, polar_to_cartesian};

    const CENTER: Point = Point { x: 200.0, y: 200.0 };
    const MAX_RADIUS: f64 = 150.0;
    const TOLERANCE: f64 = 20.0;

    #[test]
    fn test_on_axis_points_hit_their_slice() {
        for i in 0..DIMENSION_COUNT {
            let p = polar_to_cartesian(CENTER, MAX_RADIUS * 0.5, axis_angle(i));
            assert_eq!(hit_test(p, CENTER, MAX_RADIUS, TOLERANCE), Some(i));
        }
    }

    #[test]
    fn test_outside_radius_is_no_hit() {
        for i in 0..DIMENSION_COUNT {
            let p = polar_to_cartesian(CENTER, MAX_RADIUS + TOLERANCE + 1.0, axis_angle(i));
            assert_eq!(hit_test(p, CENTER, MAX_RADIUS, TOLERANCE), None);
        }
    }

    #[test]
    fn test_tolerance_band_still_hits() {
        let p = polar_to_cartesian(CENTER, MAX_RADIUS + TOLERANCE - 1.0, axis_angle(2));
        assert_eq!(hit_test(p, CENTER, MAX_RADIUS, TOLERANCE), Some(2));
    }

    #[test]
    fn test_zones_are_centered_on_axes() {
        // just inside zone 0's clockwise edge, a hair before axis 1's zone
        let edge = axis_angle(0) + SLICE_ANGLE / 2.0 - 1e-6;
        let p = polar_to_cartesian(CENTER, 100.0, edge);
        assert_eq!(hit_test(p, CENTER, MAX_RADIUS, TOLERANCE), Some(0));

        // just past the edge belongs to slice 1
        let past = axis_angle(0) + SLICE_ANGLE / 2.0 + 1e-6;
        let p = polar_to_cartesian(CENTER, 100.0, past);
        assert_eq!(hit_test(p, CENTER, MAX_RADIUS, TOLERANCE), Some(1));
    }

    #[test]
    fn test_center_hits_slice_under_axis_zero() {
        // degenerate pointer at the exact center: atan2(0, 0) is 0, which
        // lands in the slice to the right of the top axis
        let idx = hit_test(CENTER, CENTER, MAX_RADIUS, TOLERANCE);
        assert!(idx.is_some());
    }
}
