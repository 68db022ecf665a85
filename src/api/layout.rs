#[cfg(feature = "parallel-layout")]
use rayon::prelude::*;
use tracing::debug;

use crate::core::{BoundingBox, GeometryBundle, build_time_axis, build_value_axis};
use crate::error::PlotResult;

use super::PlotConfig;

/// Computes the full plot geometry for one configuration.
///
/// The config is validated before anything is laid out; the function is pure
/// and may be called from any thread.
pub fn assemble_layout(config: &PlotConfig) -> PlotResult<GeometryBundle> {
    config.validate()?;

    let horizontal_extent = config.horizontal_extent();
    let vertical_extent = config.vertical_extent();
    debug!(
        x_start = horizontal_extent.start,
        x_end = horizontal_extent.end,
        y_start = vertical_extent.start,
        y_end = vertical_extent.end,
        kind = ?config.scale_kind(),
        "assembling plot layout"
    );

    let tick_lengths = config.tick_lengths();
    let horizontal = build_time_axis(horizontal_extent, tick_lengths);
    let vertical = build_value_axis(config.value_axis_spec(), vertical_extent, tick_lengths);

    Ok(GeometryBundle {
        horizontal,
        vertical,
        bounding_box: BoundingBox::from_extents(horizontal_extent, vertical_extent),
    })
}

/// Lays out several plots, returning results in input order.
pub fn assemble_layouts(configs: &[PlotConfig]) -> Vec<PlotResult<GeometryBundle>> {
    #[cfg(feature = "parallel-layout")]
    {
        configs.par_iter().map(assemble_layout).collect()
    }

    #[cfg(not(feature = "parallel-layout"))]
    {
        configs.iter().map(assemble_layout).collect()
    }
}
