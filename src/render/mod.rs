mod assets;
mod frame;
mod null_renderer;
mod primitives;
mod svg;

pub use assets::{Assets, CURSOR_LINE_JS_FILE, FONT_CSS_FILE};
pub use frame::{DocumentSettings, PlotScene};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, Palette, solarized};
pub use svg::{SPLIT_MARKER, SvgRenderStats, SvgRenderer, render_svg};

use crate::error::PlotResult;

/// Contract implemented by any document backend.
///
/// Backends receive fully computed geometry so drawing code stays isolated
/// from axis layout.
pub trait Renderer {
    fn render(&mut self, scene: &PlotScene<'_>) -> PlotResult<()>;
}
