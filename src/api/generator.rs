use tracing::info;

use crate::core::GeometryBundle;
use crate::error::PlotResult;
use crate::render::{Assets, DocumentSettings, Palette, PlotScene, Renderer};

use super::{PlotConfig, PlotDiagnostics, assemble_layout};

/// Lays out one plot and hands it to a renderer.
///
/// Geometry is computed once at construction, so a generator that exists
/// always holds a valid layout.
#[derive(Debug)]
pub struct PlotGenerator<R: Renderer> {
    renderer: R,
    config: PlotConfig,
    geometry: GeometryBundle,
    document: DocumentSettings,
}

impl<R: Renderer> PlotGenerator<R> {
    pub fn new(renderer: R, config: PlotConfig, assets: Assets) -> PlotResult<Self> {
        let geometry = assemble_layout(&config)?;
        let document = DocumentSettings::from_config(&config, assets);
        Ok(Self {
            renderer,
            config,
            geometry,
            document,
        })
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.document = self.document.with_palette(palette);
        self
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> &GeometryBundle {
        &self.geometry
    }

    #[must_use]
    pub fn document(&self) -> &DocumentSettings {
        &self.document
    }

    #[must_use]
    pub fn diagnostics(&self) -> PlotDiagnostics {
        PlotDiagnostics::from_geometry(&self.geometry, &self.config)
    }

    pub fn render(&mut self) -> PlotResult<()> {
        let diagnostics = self.diagnostics();
        info!(
            x_origin = diagnostics.x_origin,
            y_origin = diagnostics.y_origin,
            x_length = diagnostics.x_length,
            y_length = diagnostics.y_length,
            "rendering plot"
        );
        let scene = PlotScene::new(&self.geometry, &self.document);
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
