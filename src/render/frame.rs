use crate::api::PlotConfig;
use crate::core::GeometryBundle;
use crate::error::{PlotError, PlotResult};
use crate::render::{Assets, Palette};

/// Document-level settings that do not affect layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSettings {
    pub width: u32,
    pub height: u32,
    pub margins: u32,
    pub font_size: u32,
    pub label_font_size: u32,
    pub x_text: String,
    pub y_text: String,
    pub template: bool,
    pub cursor_line: bool,
    pub palette: Palette,
    pub assets: Assets,
}

impl DocumentSettings {
    #[must_use]
    pub fn from_config(config: &PlotConfig, assets: Assets) -> Self {
        Self {
            width: config.width,
            height: config.height,
            margins: config.margins,
            font_size: config.font_size,
            label_font_size: config.label_font_size,
            x_text: config.x_text.clone(),
            y_text: config.y_text.clone(),
            template: config.template,
            cursor_line: config.cursor_line,
            palette: Palette::default(),
            assets,
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.font_size == 0 || self.label_font_size == 0 {
            return Err(PlotError::InvalidConfig(
                "font sizes must be > 0".to_owned(),
            ));
        }
        self.palette.validate()
    }
}

/// Backend-agnostic input of one document render pass.
#[derive(Debug, Clone, Copy)]
pub struct PlotScene<'a> {
    pub geometry: &'a GeometryBundle,
    pub document: &'a DocumentSettings,
}

impl<'a> PlotScene<'a> {
    #[must_use]
    pub fn new(geometry: &'a GeometryBundle, document: &'a DocumentSettings) -> Self {
        Self { geometry, document }
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.document.validate()?;

        let geometry = self.geometry;
        let positions = geometry
            .horizontal
            .ticks
            .iter()
            .chain(&geometry.vertical.ticks)
            .map(|tick| tick.position)
            .chain(geometry.horizontal.labels.iter().map(|label| label.position))
            .chain(geometry.vertical.labels.iter().map(|label| label.position));
        for position in positions {
            if !position.is_finite() {
                return Err(PlotError::InvalidConfig(
                    "geometry positions must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
