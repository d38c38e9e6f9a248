use std::f64::consts::PI;

pub mod color;
pub mod curve;
pub mod geometry;
pub mod hit;
pub mod model;
pub mod view;

pub use geometry::Point;
pub use model::{ChartState, Mode};

pub const DIMENSION_COUNT: usize = 5;
pub const MAX_SCORE: u8 = 7;
pub const MAX_AGGREGATE: u32 = MAX_SCORE as u32 * DIMENSION_COUNT as u32;

pub const SLICE_ANGLE: f64 = 2.0 * PI / DIMENSION_COUNT as f64;
pub const START_ANGLE: f64 = -PI / 2.0; // axis 0 points straight up
pub const MIN_VERTEX_RADIUS: f64 = 2.0; // keeps the tangent angle defined at score 0
pub const CURVE_TENSION: f64 = 0.35;
pub const FOCUS_SCALE: f64 = 1.05;

pub const SURFACE_MARGIN: f64 = 50.0; // label breathing room around the grid
pub const HOVER_TOLERANCE: f64 = 20.0; // hit-test slack past the outer ring
pub const HOVER_CLIP_FACTOR: f64 = 1.2; // hover wedge radius, relative to max_radius
pub const FOCUS_CLIP_FACTOR: f64 = 1.5; // focus wedge radius, relative to max_radius

pub const MARKER_RADIUS: f64 = 4.0;
pub const LABEL_OFFSET: f64 = 30.0;
pub const BASE_FILL_ALPHA: f64 = 0.8;
pub const DIMMED_ALPHA: f64 = 0.2;
