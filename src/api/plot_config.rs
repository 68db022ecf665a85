use serde::{Deserialize, Serialize};

use crate::core::{AxisExtent, ScaleKind, TickLengths, ValueAxisSpec, ValueRange};
use crate::error::{AxisKind, PlotError, PlotResult};

/// Most steps the vertical range may be divided into.
pub const MAX_VALUE_DIVISIONS: f64 = 10_000.0;

/// Plot bootstrap configuration.
///
/// Every field has a default so partial JSON documents load cleanly.
/// Margins follow the axis they make room for: `y_margin` is the gap left of
/// the plot (where the y labels sit), `x_margin` the gap below it, and
/// `margins` the gap on the two unlabeled sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub y_first: f64,
    pub y_last: f64,
    pub y_step: f64,
    pub log: bool,
    pub x_margin: u32,
    pub y_margin: u32,
    pub margins: u32,
    pub long_tick_len: u32,
    pub short_tick_len: u32,
    pub font_size: u32,
    pub label_font_size: u32,
    pub template: bool,
    pub cursor_line: bool,
    pub x_text: String,
    pub y_text: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 380,
            y_first: 0.0,
            y_last: 5.0,
            y_step: 1.0,
            log: false,
            x_margin: 70,
            y_margin: 100,
            margins: 25,
            long_tick_len: 10,
            short_tick_len: 5,
            font_size: 12,
            label_font_size: 14,
            template: false,
            cursor_line: false,
            x_text: "x-axis".to_owned(),
            y_text: "y-axis".to_owned(),
        }
    }
}

impl PlotConfig {
    /// Loads a config from JSON, filling missing fields with defaults.
    pub fn from_json_str(raw: &str) -> PlotResult<Self> {
        serde_json::from_str(raw).map_err(|err| PlotError::ConfigFile(err.to_string()))
    }

    /// Sets canvas size in pixels.
    #[must_use]
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the vertical range and step.
    #[must_use]
    pub fn with_y_range(mut self, first: f64, last: f64, step: f64) -> Self {
        self.y_first = first;
        self.y_last = last;
        self.y_step = step;
        self
    }

    /// Switches the vertical axis to a logarithmic scale, with the range
    /// read as powers of ten.
    #[must_use]
    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, x_margin: u32, y_margin: u32, margins: u32) -> Self {
        self.x_margin = x_margin;
        self.y_margin = y_margin;
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tick_lengths(mut self, long: u32, short: u32) -> Self {
        self.long_tick_len = long;
        self.short_tick_len = short;
        self
    }

    /// Emits `[SPLIT]` markers instead of an empty data path.
    #[must_use]
    pub fn with_template(mut self, template: bool) -> Self {
        self.template = template;
        self
    }

    #[must_use]
    pub fn with_cursor_line(mut self, cursor_line: bool) -> Self {
        self.cursor_line = cursor_line;
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x_text: impl Into<String>, y_text: impl Into<String>) -> Self {
        self.x_text = x_text.into();
        self.y_text = y_text.into();
        self
    }

    #[must_use]
    pub fn scale_kind(&self) -> ScaleKind {
        ScaleKind::from_log_flag(self.log)
    }

    #[must_use]
    pub fn value_range(&self) -> ValueRange {
        ValueRange::new(self.y_first, self.y_last)
    }

    #[must_use]
    pub fn value_axis_spec(&self) -> ValueAxisSpec {
        ValueAxisSpec {
            range: self.value_range(),
            step: self.y_step,
            kind: self.scale_kind(),
        }
    }

    #[must_use]
    pub fn tick_lengths(&self) -> TickLengths {
        TickLengths {
            long: f64::from(self.long_tick_len),
            short: f64::from(self.short_tick_len),
        }
    }

    /// Horizontal pixel span: from `y_margin` to `width - margins`.
    #[must_use]
    pub fn horizontal_extent(&self) -> AxisExtent {
        AxisExtent::new(
            f64::from(self.y_margin),
            f64::from(self.width) - f64::from(self.margins),
        )
    }

    /// Vertical pixel span: from `margins` to `height - x_margin`.
    #[must_use]
    pub fn vertical_extent(&self) -> AxisExtent {
        AxisExtent::new(
            f64::from(self.margins),
            f64::from(self.height) - f64::from(self.x_margin),
        )
    }

    /// Checks every invariant the layout relies on.
    pub fn validate(&self) -> PlotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }

        for (field, value) in [
            ("y_first", self.y_first),
            ("y_last", self.y_last),
            ("y_step", self.y_step),
        ] {
            if !value.is_finite() {
                return Err(PlotError::InvalidConfig(format!(
                    "`{field}` must be finite"
                )));
            }
        }

        if self.y_last <= self.y_first {
            return Err(PlotError::InvalidRange {
                first: self.y_first,
                last: self.y_last,
            });
        }
        if self.y_step <= 0.0 {
            return Err(PlotError::InvalidStep { step: self.y_step });
        }
        let divisions = (self.y_last - self.y_first) / self.y_step;
        if divisions > MAX_VALUE_DIVISIONS {
            return Err(PlotError::InvalidConfig(format!(
                "y range spans {divisions} steps of {}, at most {MAX_VALUE_DIVISIONS} allowed",
                self.y_step
            )));
        }
        if self.log
            && (self.y_first < f64::from(f64::MIN_10_EXP) || self.y_last > f64::from(f64::MAX_10_EXP))
        {
            return Err(PlotError::InvalidConfig(format!(
                "log range exponents must lie within [{}, {}]",
                f64::MIN_10_EXP,
                f64::MAX_10_EXP
            )));
        }

        for (axis, extent) in [
            (AxisKind::Horizontal, self.horizontal_extent()),
            (AxisKind::Vertical, self.vertical_extent()),
        ] {
            if extent.length <= 0.0 {
                return Err(PlotError::DegenerateExtent {
                    axis,
                    length: extent.length,
                });
            }
        }

        Ok(())
    }
}
