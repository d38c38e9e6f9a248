use std::f64::consts::PI;

use crate::chart::geometry::{self, Point};
use crate::chart::{CURVE_TENSION, DIMENSION_COUNT};

/// One cubic segment of the blob outline; the start point is the previous
/// segment's `to` (or [`BlobCurve::start`] for the first segment).
#[derive(Debug, Clone, Copy)]
pub struct CurveSegment {
    pub cp1: Point,
    pub cp2: Point,
    pub to: Point,
}

/// Closed outline through the five score vertices, one cubic per
/// consecutive vertex pair. The last segment lands back on `start`.
#[derive(Debug, Clone)]
pub struct BlobCurve {
    pub start: Point,
    pub segments: [CurveSegment; DIMENSION_COUNT],
}

/// Control points for the segment from `p1` to `p2` around `center`.
///
/// The tangent at each vertex is perpendicular to its radius vector, so the
/// blob reads as a deformed circle rather than a polygon. The offsets are
/// opposite-signed (+PI/2 outgoing, -PI/2 incoming) so the curve bulges
/// outward symmetrically instead of crossing itself. Control distance scales
/// with the chord length to keep curvature proportionate for near and far
/// vertex pairs alike.
pub fn control_points(p1: Point, p2: Point, center: Point, tension: f64) -> (Point, Point) {
    let tan1 = p1.angle_from(center) + PI / 2.0;
    let tan2 = p2.angle_from(center) - PI / 2.0;

    let control_dist = p1.distance(p2) * tension;

    let cp1 = Point::new(
        p1.x + tan1.cos() * control_dist,
        p1.y + tan1.sin() * control_dist,
    );
    let cp2 = Point::new(
        p2.x + tan2.cos() * control_dist,
        p2.y + tan2.sin() * control_dist,
    );
    (cp1, cp2)
}

/// Builds the closed blob through the five score vertices. `scale`
/// multiplies each vertex radius (not the center), producing the uniformly
/// enlarged variant the focus overlay pops forward.
pub fn build_blob(
    scores: &[u8; DIMENSION_COUNT],
    center: Point,
    max_radius: f64,
    scale: f64,
) -> BlobCurve {
    let vertices: [Point; DIMENSION_COUNT] =
        std::array::from_fn(|i| geometry::vertex(scores[i], i, center, max_radius, scale));

    let segments = std::array::from_fn(|i| {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % DIMENSION_COUNT];
        let (cp1, cp2) = control_points(p1, p2, center, CURVE_TENSION);
        CurveSegment { cp1, cp2, to: p2 }
    });

    BlobCurve {
        start: vertices[0],
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CENTER: Point = Point { x: 200.0, y: 200.0 };

    #[test]
    fn test_blob_has_five_segments_and_closes() {
        let blob = build_blob(&[3, 7, 5, 7, 1], CENTER, 150.0, 1.0);
        assert_eq!(blob.segments.len(), 5);
        let last = blob.segments[4];
        assert_relative_eq!(last.to.x, blob.start.x, epsilon = 1e-9);
        assert_relative_eq!(last.to.y, blob.start.y, epsilon = 1e-9);
    }

    #[test]
    fn test_segments_chain() {
        let blob = build_blob(&[2, 4, 6, 1, 3], CENTER, 120.0, 1.0);
        let mut from = blob.start;
        for (i, seg) in blob.segments.iter().enumerate() {
            let expected = geometry::vertex([2, 4, 6, 1, 3][i], i, CENTER, 120.0, 1.0);
            assert_relative_eq!(from.x, expected.x, epsilon = 1e-9);
            assert_relative_eq!(from.y, expected.y, epsilon = 1e-9);
            from = seg.to;
        }
    }

    #[test]
    fn test_control_point_distance_scales_with_chord() {
        let p1 = Point::new(200.0, 100.0);
        let p2 = Point::new(300.0, 200.0);
        let (cp1, cp2) = control_points(p1, p2, CENTER, 0.35);

        let chord = p1.distance(p2);
        assert_relative_eq!(p1.distance(cp1), chord * 0.35, epsilon = 1e-9);
        assert_relative_eq!(p2.distance(cp2), chord * 0.35, epsilon = 1e-9);
    }

    #[test]
    fn test_tangents_perpendicular_to_radius() {
        let p1 = Point::new(200.0, 100.0); // straight up from center
        let p2 = Point::new(300.0, 200.0); // straight right
        let (cp1, cp2) = control_points(p1, p2, CENTER, 0.35);

        // outgoing handle at p1 points along +x (radius angle -PI/2 + PI/2)
        assert_relative_eq!(cp1.y, p1.y, epsilon = 1e-9);
        assert!(cp1.x > p1.x);

        // incoming handle at p2 points along -y (radius angle 0 - PI/2)
        assert_relative_eq!(cp2.x, p2.x, epsilon = 1e-9);
        assert!(cp2.y < p2.y);
    }

    #[test]
    fn test_scaled_blob_is_enlarged_from_center() {
        let scores = [3, 7, 5, 7, 1];
        let base = build_blob(&scores, CENTER, 150.0, 1.0);
        let popped = build_blob(&scores, CENTER, 150.0, 1.05);

        let base_r = base.start.distance(CENTER);
        let popped_r = popped.start.distance(CENTER);
        assert_relative_eq!(popped_r, base_r * 1.05, epsilon = 1e-9);
    }
}
