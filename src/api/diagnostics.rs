use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::GeometryBundle;

use super::PlotConfig;

/// Major divisions on the time axis (one every two hours).
const TIME_AXIS_MAJOR_DIVISIONS: f64 = 12.0;

/// Derived quantities useful when preparing data paths for the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotDiagnostics {
    pub x_origin: f64,
    pub y_origin: f64,
    pub x_length: f64,
    pub y_length: f64,
    pub px_per_x_division: f64,
    pub px_per_y_division: f64,
}

impl PlotDiagnostics {
    #[must_use]
    pub fn from_geometry(geometry: &GeometryBundle, config: &PlotConfig) -> Self {
        let bounds = geometry.bounding_box;
        let (x_origin, y_origin) = bounds.origin();
        let x_length = bounds.width();
        let y_length = bounds.height();
        Self {
            x_origin,
            y_origin,
            x_length,
            y_length,
            px_per_x_division: round_to_hundredths(x_length / TIME_AXIS_MAJOR_DIVISIONS),
            px_per_y_division: round_to_hundredths(y_length / config.value_range().span()),
        }
    }
}

impl fmt::Display for PlotDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "X Origin           {}", self.x_origin)?;
        writeln!(f, "Y Origin           {}", self.y_origin)?;
        writeln!(f, "X Length           {}", self.x_length)?;
        writeln!(f, "Y Length           {}", self.y_length)?;
        writeln!(f, "Px per x division  {}", self.px_per_x_division)?;
        write!(f, "Px per y division  {}", self.px_per_y_division)
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
