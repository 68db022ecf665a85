use tracing::trace;

use crate::core::axis::{format_log_label, format_stepped_number, to_pixel};
use crate::core::scale::{ScaleKind, generate, major_values};
use crate::core::time_axis::TickLengths;
use crate::core::{AxisExtent, AxisGeometry, GridLine, Label, Tick, ValueRange};

/// Stepped data range of the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxisSpec {
    pub range: ValueRange,
    pub step: f64,
    pub kind: ScaleKind,
}

impl ValueAxisSpec {
    fn major_label(self, major: f64) -> String {
        match self.kind {
            ScaleKind::Linear => format_stepped_number(major, self.range.first, self.step),
            ScaleKind::Logarithmic => format_log_label(major),
        }
    }
}

/// Builds grid lines, ticks and labels of the vertical data axis.
///
/// Grid lines and labels are emitted for majors only, ticks for every
/// generated value. Output order follows ascending data values, which is
/// descending pixel order.
#[must_use]
pub fn build_value_axis(
    spec: ValueAxisSpec,
    extent: AxisExtent,
    tick_lengths: TickLengths,
) -> AxisGeometry {
    let ticks = generate(spec.range.first, spec.range.last, spec.step, spec.kind);
    trace!(count = ticks.len(), kind = ?spec.kind, "generated value axis ticks");

    // Labels come from the stepped majors rather than the tick values, since a
    // log tick only carries `log10(10^y)`.
    let mut majors = major_values(spec.range.first, spec.range.last, spec.step).into_iter();

    let mut geometry = AxisGeometry::new(extent);
    geometry.ticks.reserve(ticks.len());
    for tick in ticks {
        let position = to_pixel(tick.value, spec.range, extent);
        geometry.ticks.push(Tick {
            position,
            length: tick_lengths.for_major(tick.is_major),
            is_major: tick.is_major,
        });
        if !tick.is_major {
            continue;
        }

        geometry.grid_lines.push(GridLine { position });
        let major = majors.next().unwrap_or(tick.value);
        geometry
            .labels
            .push(Label::new(position, spec.major_label(major)));
    }

    geometry
}
