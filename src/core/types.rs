use serde::{Deserialize, Serialize};

use crate::core::AxisExtent;

/// Full-length grid line across the plot at `position` on its axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub position: f64,
}

/// Tick mark drawn inward from both edges of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position: f64,
    pub length: f64,
    pub is_major: bool,
}

/// Axis label anchored at `position` on its axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub position: f64,
    pub text: String,
}

impl Label {
    #[must_use]
    pub fn new(position: f64, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// Computed decorations of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub extent: AxisExtent,
    pub grid_lines: Vec<GridLine>,
    pub ticks: Vec<Tick>,
    pub labels: Vec<Label>,
}

impl AxisGeometry {
    #[must_use]
    pub fn new(extent: AxisExtent) -> Self {
        Self {
            extent,
            grid_lines: Vec::new(),
            ticks: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn major_tick_count(&self) -> usize {
        self.ticks.iter().filter(|tick| tick.is_major).count()
    }
}

/// Plot frame from `(x_start, y_start)` to `(x_end, y_end)` in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_start: f64,
    pub y_start: f64,
    pub x_end: f64,
    pub y_end: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn from_extents(horizontal: AxisExtent, vertical: AxisExtent) -> Self {
        Self {
            x_start: horizontal.start,
            y_start: vertical.start,
            x_end: horizontal.end,
            y_end: vertical.end,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_end - self.x_start
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_end - self.y_start
    }

    /// Bottom-left corner, where the data path is anchored.
    #[must_use]
    pub fn origin(self) -> (f64, f64) {
        (self.x_start, self.y_end)
    }
}

/// Everything a renderer needs to draw the plot scaffolding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryBundle {
    pub horizontal: AxisGeometry,
    pub vertical: AxisGeometry,
    pub bounding_box: BoundingBox,
}

impl GeometryBundle {
    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        self.bounding_box.origin()
    }
}
