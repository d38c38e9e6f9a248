use crate::chart::geometry::Point;
use crate::chart::{hit, DIMENSION_COUNT, HOVER_TOLERANCE, SURFACE_MARGIN};
use crate::data::{Dimension, DimensionData};

/// Which of the two visual modes the chart is in. Transitions are driven
/// from outside (clicks, socket commands, Escape); the renderer only reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Overview,
    Focus(Dimension),
}

impl Mode {
    pub fn focused(&self) -> Option<Dimension> {
        match self {
            Self::Overview => None,
            Self::Focus(dim) => Some(*dim),
        }
    }
}

/// Everything a frame is drawn from. Recomputed geometry (center, max
/// radius) is derived from the surface size on resize; nothing else is
/// retained between draws.
pub struct ChartState {
    pub dimensions: [DimensionData; DIMENSION_COUNT],
    pub mode: Mode,
    pub hover_index: Option<usize>,
    pub center: Point,
    pub max_radius: f64,
}

impl ChartState {
    pub fn new(dimensions: [DimensionData; DIMENSION_COUNT], width: f64, height: f64) -> Self {
        let mut state = Self {
            dimensions,
            mode: Mode::Overview,
            hover_index: None,
            center: Point::default(),
            max_radius: 0.0,
        };
        state.resize(width, height);
        state
    }

    /// Re-derives center and radius for a new surface size. Called before
    /// the next draw whenever the drawing area changes dimensions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.center = Point::new(width / 2.0, height / 2.0);
        self.max_radius = (width.min(height) / 2.0 - SURFACE_MARGIN).max(0.0);
    }

    pub fn scores(&self) -> [u8; DIMENSION_COUNT] {
        std::array::from_fn(|i| self.dimensions[i].score)
    }

    pub fn aggregate(&self) -> u32 {
        self.dimensions.iter().map(|d| d.score as u32).sum()
    }

    /// Updates the hover index from a pointer position. Returns whether the
    /// hover changed (and a redraw is due). Ignored entirely in focus mode.
    pub fn update_cursor(&mut self, cursor: Point) -> bool {
        if self.mode != Mode::Overview {
            return false;
        }
        let new_idx = hit::hit_test(cursor, self.center, self.max_radius, HOVER_TOLERANCE);
        let changed = self.hover_index != new_idx;
        self.hover_index = new_idx;
        changed
    }

    pub fn clear_hover(&mut self) -> bool {
        let changed = self.hover_index.is_some();
        self.hover_index = None;
        changed
    }

    /// The dimension a click activates, if any: only meaningful in overview
    /// mode with the pointer inside a slice.
    pub fn activation(&self) -> Option<Dimension> {
        match self.mode {
            Mode::Overview => self.hover_index.and_then(Dimension::from_index),
            Mode::Focus(_) => None,
        }
    }

    pub fn focus(&mut self, dimension: Dimension) {
        self.mode = Mode::Focus(dimension);
        self.hover_index = None;
    }

    pub fn overview(&mut self) {
        self.mode = Mode::Overview;
        self.hover_index = None;
    }
}
