use serde::{Deserialize, Serialize};

/// Largest power of ten written out as a plain integer on a log axis.
pub const LOG_PLAIN_LABEL_LIMIT: f64 = 10_000.0;

/// Pixel span allocated to one axis once margins are removed from the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisExtent {
    pub start: f64,
    pub end: f64,
    pub length: f64,
}

impl AxisExtent {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            length: end - start,
        }
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.start + self.length / 2.0
    }
}

/// Data-space interval mapped onto an [`AxisExtent`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub first: f64,
    pub last: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(first: f64, last: f64) -> Self {
        Self { first, last }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.last - self.first
    }
}

/// Maps a data value onto an inverted pixel axis.
///
/// `range.first` lands on `extent.end` and `range.last` on `extent.start`,
/// so larger values get smaller pixel coordinates. Exponent-domain values of
/// a log axis go through the same interpolation.
#[must_use]
pub fn to_pixel(value: f64, range: ValueRange, extent: AxisExtent) -> f64 {
    extent.end - (value - range.first) * (extent.length / range.span())
}

/// Formats a number without a trailing `.0` when it is whole.
///
/// `5.0` becomes `"5"`, `5.5` stays `"5.5"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Formats a linear major rounded to the decimals carried by the axis start
/// and step.
///
/// Majors are computed as `first + i * step`, so float noise such as
/// `0.30000000000000004` is rounded away while whole numbers still drop `.0`.
#[must_use]
pub fn format_stepped_number(value: f64, first: f64, step: f64) -> String {
    let places = decimal_places(first).max(decimal_places(step));
    let text = format!("{value:.places$}");
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    match trimmed {
        "" | "-0" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn decimal_places(value: f64) -> usize {
    format!("{}", value.abs())
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// Formats the major label of a log axis for the given base-10 exponent.
///
/// Powers up to [`LOG_PLAIN_LABEL_LIMIT`] print as integers, larger ones in
/// exponential notation with no fractional digits (`1e+05`).
#[must_use]
pub fn format_log_label(exponent: f64) -> String {
    let raw = 10f64.powf(exponent);
    // `powf` may land a hair off an exact power of ten.
    let nearest = raw.round();
    let value = if (raw - nearest).abs() <= raw * 1e-12 {
        nearest
    } else {
        raw
    };

    if value <= LOG_PLAIN_LABEL_LIMIT {
        format!("{:.0}", value.trunc())
    } else {
        format_exponential(value)
    }
}

/// Normalized exponential notation with a signed, two-digit exponent.
fn format_exponential(value: f64) -> String {
    let raw = format!("{value:.0e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}
