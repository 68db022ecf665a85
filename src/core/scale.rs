use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Quarter subdivisions of one linear step.
const LINEAR_MINOR_FRACTIONS: [f64; 4] = [0.0, 0.25, 0.5, 0.75];
/// Multipliers placed inside one decade of a logarithmic axis.
const LOG_DECADE_MULTIPLIERS: [f64; 4] = [1.0, 2.5, 5.0, 7.5];

/// Tick placement strategy of the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleKind {
    /// Evenly spaced values, each step split into quarters.
    #[default]
    Linear,
    /// Range bounds and step are base-10 exponents; each decade carries
    /// 2.5x, 5x and 7.5x subdivisions.
    Logarithmic,
}

impl ScaleKind {
    #[must_use]
    pub fn from_log_flag(log: bool) -> Self {
        if log { Self::Logarithmic } else { Self::Linear }
    }
}

/// One grid position in data space.
///
/// For [`ScaleKind::Logarithmic`] the value lives in the exponent domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTick {
    pub value: f64,
    pub is_major: bool,
}

impl ScaleTick {
    #[must_use]
    pub const fn new(value: f64, is_major: bool) -> Self {
        Self { value, is_major }
    }
}

/// Inclusive floating point step from `first` to `last`.
///
/// Values are computed by index rather than accumulated, and the count gets a
/// small relative tolerance so a bound that is reached up to float noise is
/// still emitted. Every value is clamped to `last`.
#[must_use]
pub fn major_values(first: f64, last: f64, step: f64) -> Vec<f64> {
    if !(first.is_finite() && last.is_finite() && step.is_finite()) || step <= 0.0 || last < first
    {
        return Vec::new();
    }

    let span = last - first;
    let tolerance = (first.abs() + last.abs() + span) / step * f64::EPSILON;
    let divisions = (span / step + tolerance).floor();
    if !divisions.is_finite() {
        return Vec::new();
    }
    let Some(count) = (divisions as usize).checked_add(1) else {
        return Vec::new();
    };

    (0..count)
        .map(|index| (first + index as f64 * step).min(last))
        .collect()
}

/// Generates every major and minor tick of the vertical axis in ascending
/// data order.
///
/// Majors below `last` are followed by three minors; the major sitting on
/// `last` closes the sequence on its own. Minors reaching `last` or the next
/// major are dropped, so nothing overshoots the range when `step` does not
/// divide it.
#[must_use]
pub fn generate(first: f64, last: f64, step: f64, kind: ScaleKind) -> Vec<ScaleTick> {
    let majors = major_values(first, last, step);
    let mut ticks = Vec::with_capacity(majors.len() * LINEAR_MINOR_FRACTIONS.len());

    for major in majors {
        let subdivisions: SmallVec<[f64; 4]> = match kind {
            ScaleKind::Linear if major < last => LINEAR_MINOR_FRACTIONS
                .iter()
                .map(|fraction| fraction * step)
                .collect(),
            ScaleKind::Logarithmic if major < last => {
                SmallVec::from_slice(&LOG_DECADE_MULTIPLIERS)
            }
            ScaleKind::Linear => SmallVec::from_slice(&[0.0]),
            ScaleKind::Logarithmic => SmallVec::from_slice(&[1.0]),
        };

        for subdivision in subdivisions {
            let tick = match kind {
                ScaleKind::Linear => ScaleTick::new(major + subdivision, subdivision == 0.0),
                ScaleKind::Logarithmic => ScaleTick::new(
                    (10f64.powf(major) * subdivision).log10(),
                    subdivision == 1.0,
                ),
            };
            if !tick.is_major && (tick.value >= last || tick.value >= major + step) {
                continue;
            }
            ticks.push(tick);
        }
    }

    ticks
}
