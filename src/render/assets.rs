use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PlotError, PlotResult};

pub const FONT_CSS_FILE: &str = "font.css";
pub const CURSOR_LINE_JS_FILE: &str = "cursor_line.js";

const XSTART_PLACEHOLDER: &str = "[XSTART]";
const XEND_PLACEHOLDER: &str = "[XEND]";

/// Auxiliary text embedded verbatim into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    pub font_css: String,
    pub cursor_line_js: String,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            font_css: include_str!("../../assets/font.css").to_owned(),
            cursor_line_js: include_str!("../../assets/cursor_line.js").to_owned(),
        }
    }
}

impl Assets {
    /// Reads `font.css` and `cursor_line.js` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> PlotResult<Self> {
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), "loading document assets");
        Ok(Self {
            font_css: read_asset(dir.join(FONT_CSS_FILE))?,
            cursor_line_js: read_asset(dir.join(CURSOR_LINE_JS_FILE))?,
        })
    }

    /// Cursor script with the plot's horizontal bounds filled in.
    #[must_use]
    pub fn cursor_script(&self, x_start: f64, x_end: f64) -> String {
        self.cursor_line_js
            .replace(XSTART_PLACEHOLDER, &x_start.to_string())
            .replace(XEND_PLACEHOLDER, &x_end.to_string())
    }
}

fn read_asset(path: PathBuf) -> PlotResult<String> {
    fs::read_to_string(&path).map_err(|source| PlotError::Asset { path, source })
}
