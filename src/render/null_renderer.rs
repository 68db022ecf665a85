use crate::error::PlotResult;
use crate::render::{PlotScene, Renderer};

/// No-op renderer used by tests and headless layout runs.
///
/// It still validates the scene so tests can catch invalid geometry without
/// producing markup.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_tick_count: usize,
    pub last_label_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &PlotScene<'_>) -> PlotResult<()> {
        scene.validate()?;
        let geometry = scene.geometry;
        self.last_tick_count = geometry.horizontal.ticks.len() + geometry.vertical.ticks.len();
        self.last_label_count = geometry.horizontal.labels.len() + geometry.vertical.labels.len();
        self.render_count += 1;
        Ok(())
    }
}
