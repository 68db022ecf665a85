use crate::error::{PlotError, PlotResult};

/// RGB color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `rrggbb` or `#rrggbb`.
    pub fn from_html(raw: &str) -> PlotResult<Self> {
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(PlotError::InvalidConfig(format!(
                "color `{raw}` must be six hex digits"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| {
                PlotError::InvalidConfig(format!("color `{raw}` must be six hex digits"))
            })
        };
        Ok(Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Writes the color as `#rrggbb`.
    #[must_use]
    pub fn to_html(self) -> String {
        let to_byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue)
        )
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidConfig(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Accent colors of the Solarized palette.
pub mod solarized {
    use super::Color;

    pub const ORANGE: Color = Color::rgb8(0xcb, 0x4b, 0x16);
    pub const RED: Color = Color::rgb8(0xdc, 0x32, 0x2f);
}

/// Colors used by the document renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub cursor_line: Color,
    pub plot: Color,
    pub no_data: Color,
    pub frame: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cursor_line: solarized::ORANGE,
            plot: solarized::RED,
            no_data: solarized::RED,
            frame: Color::rgb8(0x33, 0x33, 0x33),
            text: Color::rgb(0.0, 0.0, 0.0),
        }
    }
}

impl Palette {
    pub fn validate(self) -> PlotResult<()> {
        for color in [
            self.cursor_line,
            self.plot,
            self.no_data,
            self.frame,
            self.text,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}
