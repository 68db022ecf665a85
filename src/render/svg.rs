//! SVG document backend.
//!
//! Writes the plot scaffolding as a standalone SVG 1.1 document. The data
//! path is left empty (or replaced by `[SPLIT]` markers in template mode) so
//! a later step can splice real data into the plot group, whose coordinate
//! system has its origin at the bottom-left corner of the plot and y growing
//! upward.

use tracing::debug;

use crate::core::{AxisGeometry, format_number};
use crate::error::PlotResult;
use crate::render::{PlotScene, Renderer};

/// Marker substituted for the data path and no-data display in templates.
pub const SPLIT_MARKER: &str = "[SPLIT]";

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
const SVG_DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;
/// Gap between the y labels and the left edge of the plot.
const Y_LABEL_PADDING_PX: f64 = 6.0;
const NO_DATA_TEXT: &str = "No Data Found";
const NO_DATA_EXTRA_FONT_PT: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub grid_lines_drawn: usize,
    pub ticks_drawn: usize,
    pub labels_drawn: usize,
}

/// Renders scenes to SVG markup kept in memory.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    markup: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the last rendered scene.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn into_markup(self) -> String {
        self.markup
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &PlotScene<'_>) -> PlotResult<()> {
        scene.validate()?;
        let (markup, stats) = write_document(scene);
        debug!(
            bytes = markup.len(),
            grid_lines = stats.grid_lines_drawn,
            ticks = stats.ticks_drawn,
            labels = stats.labels_drawn,
            "rendered svg document"
        );
        self.markup = markup;
        self.last_stats = stats;
        Ok(())
    }
}

/// Renders one scene straight to a string.
pub fn render_svg(scene: &PlotScene<'_>) -> PlotResult<String> {
    let mut renderer = SvgRenderer::new();
    renderer.render(scene)?;
    Ok(renderer.into_markup())
}

/// Pixel coordinate rounded to one decimal, without a trailing `.0`.
fn px(value: f64) -> String {
    format_number((value * 10.0).round() / 10.0)
}

fn write_document(scene: &PlotScene<'_>) -> (String, SvgRenderStats) {
    let doc = scene.document;
    let geometry = scene.geometry;
    let bounds = geometry.bounding_box;
    let (x_start, y_start) = (bounds.x_start, bounds.y_start);
    let (x_len, y_len) = (bounds.width(), bounds.height());
    let y_end = bounds.y_end;
    let font_size = f64::from(doc.font_size);
    let font_pt = format!("{}pt", doc.font_size);
    let label_font_pt = format!("{}pt", doc.label_font_size);
    let text_color = doc.palette.text.to_html();

    let mut stats = SvgRenderStats::default();
    let mut svg = SvgWriter::default();

    svg.line(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    svg.line(SVG_DOCTYPE);
    svg.open(
        "svg",
        &[
            ("viewBox", format!("0 0 {} {}", doc.width, doc.height)),
            ("width", doc.width.to_string()),
            ("height", doc.height.to_string()),
            ("xmlns", SVG_NAMESPACE.to_owned()),
            ("xmlns:xlink", XLINK_NAMESPACE.to_owned()),
            ("onmousemove", "on_mouse_move(event)".to_owned()),
            ("style", "font-family: 'Exo'".to_owned()),
        ],
    );

    svg.open("defs", &[]);
    svg.cdata_element("style", &[("type", "text/css".to_owned())], &doc.assets.font_css);
    svg.close("defs");

    if doc.cursor_line {
        svg.cdata_element(
            "script",
            &[("type", "text/javascript".to_owned())],
            &doc.assets.cursor_script(x_start, bounds.x_end),
        );
        svg.empty(
            "path",
            &[
                ("id", "cursor_line".to_owned()),
                ("d", format!("M0,{}l0,{}", px(y_start), px(y_len))),
                ("stroke", doc.palette.cursor_line.to_html()),
                ("stroke-width", "1.5".to_owned()),
                ("display", "none".to_owned()),
            ],
        );
    }

    // Horizontal axis: vertical grid lines, ticks and hour labels.
    let horizontal = &geometry.horizontal;
    svg.open("g", &stroke_group("grey", format!("translate(0,{})", px(y_start))));
    for line in &horizontal.grid_lines {
        svg.path(format!("m{} 0v{}", px(line.position), px(y_len)));
        stats.grid_lines_drawn += 1;
    }
    svg.close("g");

    svg.open("g", &stroke_group("black", format!("translate(0,{})", px(y_start))));
    for tick in &horizontal.ticks {
        svg.path(format!(
            "m{} 0v{}m0 {}v{}",
            px(tick.position),
            px(tick.length),
            px(y_len - 2.0 * tick.length),
            px(tick.length)
        ));
        stats.ticks_drawn += 1;
    }
    svg.close("g");

    stats.labels_drawn += write_labels(
        &mut svg,
        horizontal,
        &[
            ("style", "text-anchor:middle".to_owned()),
            ("stroke", "none".to_owned()),
            ("transform", format!("translate(0,{})", px(y_end + 2.0 * font_size))),
            ("font-size", font_pt.clone()),
            ("fill", text_color.clone()),
        ],
        |position| format!("translate({})", px(position)),
    );

    svg.open(
        "g",
        &[
            ("style", "text-anchor: middle".to_owned()),
            (
                "transform",
                format!(
                    "translate({} {})",
                    px(horizontal.extent.midpoint()),
                    px(f64::from(doc.height) - (f64::from(doc.margins) - font_size))
                ),
            ),
            ("font-size", label_font_pt.clone()),
            ("fill", text_color.clone()),
        ],
    );
    svg.text(&doc.x_text);
    svg.close("g");

    // Vertical axis: major grid lines, ticks and value labels.
    let vertical = &geometry.vertical;
    svg.open("g", &stroke_group("grey", format!("translate({},0)", px(x_start))));
    for line in &vertical.grid_lines {
        svg.path(format!("m0 {}h{}", px(line.position), px(x_len)));
        stats.grid_lines_drawn += 1;
    }
    svg.close("g");

    svg.open("g", &stroke_group("black", format!("translate({},0)", px(x_start))));
    for tick in &vertical.ticks {
        svg.path(format!(
            "m0 {}h{}m{} 0h{}",
            px(tick.position),
            px(tick.length),
            px(x_len - 2.0 * tick.length),
            px(tick.length)
        ));
        stats.ticks_drawn += 1;
    }
    svg.close("g");

    stats.labels_drawn += write_labels(
        &mut svg,
        vertical,
        &[
            ("style", "text-anchor:end".to_owned()),
            ("stroke", "none".to_owned()),
            (
                "transform",
                format!("translate({},0)", px(x_start - Y_LABEL_PADDING_PX)),
            ),
            ("font-size", font_pt),
            ("fill", text_color.clone()),
        ],
        |position| format!("translate(0,{})", px(position + font_size / 2.0)),
    );

    svg.open(
        "g",
        &[
            ("style", "text-anchor:middle".to_owned()),
            (
                "transform",
                format!(
                    "translate({} {}) rotate(-90)",
                    doc.margins,
                    px(vertical.extent.midpoint())
                ),
            ),
            ("font-size", label_font_pt),
            ("fill", text_color),
        ],
    );
    svg.text(&doc.y_text);
    svg.close("g");

    svg.open(
        "g",
        &[
            ("stroke", doc.palette.frame.to_html()),
            ("fill", "none".to_owned()),
        ],
    );
    svg.path(format!(
        "m{} {}v{}h{}v{}h{}z",
        px(x_start),
        px(y_start),
        px(y_len),
        px(x_len),
        px(-y_len),
        px(-x_len)
    ));
    svg.close("g");

    let (plot_path, no_data_display) = if doc.template {
        (SPLIT_MARKER, SPLIT_MARKER)
    } else {
        ("", "none")
    };

    svg.open(
        "g",
        &[(
            "transform",
            format!("translate({},{}) scale(1, -1)", px(x_start), px(y_end)),
        )],
    );
    svg.open("a", &[("xlink:title", "Plot #1".to_owned())]);
    svg.open(
        "g",
        &[
            ("stroke-width", "1.4".to_owned()),
            ("stroke-linejoin", "bevel".to_owned()),
            ("fill", "none".to_owned()),
        ],
    );
    svg.empty(
        "path",
        &[
            ("stroke", doc.palette.plot.to_html()),
            ("d", plot_path.to_owned()),
        ],
    );
    svg.close("g");
    svg.close("a");
    svg.close("g");

    let no_data_color = doc.palette.no_data.to_html();
    svg.open(
        "g",
        &[
            ("style", "text-anchor:middle".to_owned()),
            ("stroke", no_data_color.clone()),
            (
                "transform",
                format!(
                    "translate({},{})",
                    px(horizontal.extent.midpoint()),
                    px(vertical.extent.midpoint())
                ),
            ),
            (
                "font-size",
                format!("{}pt", doc.label_font_size + NO_DATA_EXTRA_FONT_PT),
            ),
            ("display", no_data_display.to_owned()),
            ("fill", no_data_color),
        ],
    );
    svg.text(NO_DATA_TEXT);
    svg.close("g");

    // Transparent overlay that swallows clicks on the finished plot.
    svg.empty(
        "rect",
        &[
            ("x", "0".to_owned()),
            ("y", "0".to_owned()),
            ("width", doc.width.to_string()),
            ("height", doc.height.to_string()),
            ("fill", "white".to_owned()),
            ("fill-opacity", "0".to_owned()),
            ("stroke", "none".to_owned()),
            ("stroke-width", "0".to_owned()),
            ("onclick", "null_handler".to_owned()),
        ],
    );

    svg.close("svg");
    (svg.finish(), stats)
}

fn stroke_group(color: &str, transform: String) -> [(&'static str, String); 3] {
    [
        ("style", format!("color:{color}")),
        ("stroke", "currentColor".to_owned()),
        ("transform", transform),
    ]
}

fn write_labels(
    svg: &mut SvgWriter,
    axis: &AxisGeometry,
    group_attrs: &[(&str, String)],
    place: impl Fn(f64) -> String,
) -> usize {
    svg.open("g", group_attrs);
    for label in &axis.labels {
        svg.open("g", &[("transform", place(label.position))]);
        svg.text(&label.text);
        svg.close("g");
    }
    svg.close("g");
    axis.labels.len()
}

/// Line-oriented markup builder with two-space indentation.
#[derive(Debug, Default)]
struct SvgWriter {
    out: String,
    depth: usize,
}

impl SvgWriter {
    fn line(&mut self, content: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(content);
        self.out.push('\n');
    }

    fn open(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.line(&format!("<{name}{}>", attributes(attrs)));
        self.depth += 1;
    }

    fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&format!("</{name}>"));
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.line(&format!("<{name}{}/>", attributes(attrs)));
    }

    fn path(&mut self, d: String) {
        self.empty("path", &[("d", d)]);
    }

    fn text(&mut self, content: &str) {
        self.line(&format!("<text>{}</text>", escape_xml(content)));
    }

    fn cdata_element(&mut self, name: &str, attrs: &[(&str, String)], content: &str) {
        self.open(name, attrs);
        // A literal `]]>` would end the section early.
        let escaped = content.replace("]]>", "]]]]><![CDATA[>");
        self.line(&format!("<![CDATA[{escaped}]]>"));
        self.close(name);
    }

    fn finish(self) -> String {
        self.out
    }
}

fn attributes(attrs: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        out.push_str(&format!(r#" {name}="{}""#, escape_xml(value)));
    }
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
