use crate::chart::{MAX_SCORE, MIN_VERTEX_RADIUS, SLICE_ANGLE, START_ANGLE};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the ray from `center` through this point, in [-PI, PI].
    pub fn angle_from(&self, center: Point) -> f64 {
        (self.y - center.y).atan2(self.x - center.x)
    }
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Angle of dimension `index`'s axis. Index 0 is at the top; subsequent
/// indices advance clockwise (surface y grows downward).
pub fn axis_angle(index: usize) -> f64 {
    START_ANGLE + index as f64 * SLICE_ANGLE
}

pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

/// Radius of a score's vertex, floored so a zero score never collapses
/// onto the center. `scale` enlarges the radius, not the floor.
pub fn vertex_radius(score: u8, max_radius: f64, scale: f64) -> f64 {
    let r = score.min(MAX_SCORE) as f64 / MAX_SCORE as f64 * max_radius * scale;
    r.max(MIN_VERTEX_RADIUS)
}

pub fn vertex(score: u8, index: usize, center: Point, max_radius: f64, scale: f64) -> Point {
    polar_to_cartesian(
        center,
        vertex_radius(score, max_radius, scale),
        axis_angle(index),
    )
}
