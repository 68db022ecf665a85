use chrono::NaiveTime;

use crate::core::{AxisExtent, AxisGeometry, GridLine, Label, Tick};

/// Hours covered by the horizontal axis.
pub const HOURS_PER_DAY: u32 = 24;

/// Tick lengths shared by both axis builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickLengths {
    pub long: f64,
    pub short: f64,
}

impl TickLengths {
    #[must_use]
    pub fn for_major(self, is_major: bool) -> f64 {
        if is_major { self.long } else { self.short }
    }
}

/// One hour division of the time-of-day axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourDivision {
    pub index: u32,
    pub position: f64,
    pub is_major: bool,
}

/// Splits the extent into 24 equal steps, yielding 25 divisions.
///
/// Even hours are major.
#[must_use]
pub fn hour_divisions(extent: AxisExtent) -> Vec<HourDivision> {
    let step = extent.length / f64::from(HOURS_PER_DAY);
    (0..=HOURS_PER_DAY)
        .map(|index| HourDivision {
            index,
            position: extent.start + f64::from(index) * step,
            is_major: index % 2 == 0,
        })
        .collect()
}

/// `HH:00` label of a division; the final division wraps back to `00:00`.
#[must_use]
pub fn hour_label(index: u32) -> String {
    NaiveTime::from_hms_opt(index % HOURS_PER_DAY, 0, 0)
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Builds grid lines, ticks and labels of the time-of-day axis.
///
/// Every division gets a grid line and a tick; only majors are labeled.
#[must_use]
pub fn build_time_axis(extent: AxisExtent, tick_lengths: TickLengths) -> AxisGeometry {
    let mut geometry = AxisGeometry::new(extent);
    for division in hour_divisions(extent) {
        geometry.grid_lines.push(GridLine {
            position: division.position,
        });
        geometry.ticks.push(Tick {
            position: division.position,
            length: tick_lengths.for_major(division.is_major),
            is_major: division.is_major,
        });
        if division.is_major {
            geometry
                .labels
                .push(Label::new(division.position, hour_label(division.index)));
        }
    }
    geometry
}
