use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use svg_plot_gen::api::PlotGenerator;
use svg_plot_gen::render::{Assets, SvgRenderer};
use svg_plot_gen::telemetry::init_default_tracing;
use svg_plot_gen::{PlotConfig, PlotError};

#[derive(Debug, Parser)]
#[command(name = "svg-plot-gen")]
#[command(
    about = "Generates an SVG plot with a 24-hour x axis",
    long_about = "Writes the grid, ticks, labels and an empty data path of a time-of-day plot as an SVG document. Plot geometry is reported on stderr."
)]
struct Cli {
    /// JSON file with plot settings; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory containing `font.css` and `cursor_line.js` to embed instead of the built-in assets.
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Write the SVG to a file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Do not print plot geometry to stderr.
    #[arg(long, short)]
    quiet: bool,
    /// Output a template containing [SPLIT] markers where a path and display attribute can be inserted.
    #[arg(long)]
    template: bool,
    /// The width of the output plot in pixels [default: 960]
    #[arg(long)]
    width: Option<u32>,
    /// The height of the output plot in pixels [default: 380]
    #[arg(long)]
    height: Option<u32>,
    /// The value at which the y axis starts [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    y_first: Option<f64>,
    /// The height of each division on the y axis [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    y_step: Option<f64>,
    /// The value at which the y axis ends [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    y_last: Option<f64>,
    /// Use a logarithmic y axis; `y_first` and `y_last` then refer to powers of 10.
    #[arg(long)]
    log: bool,
    /// The x-axis label [default: x-axis]
    #[arg(long)]
    x_text: Option<String>,
    /// The y-axis label [default: y-axis]
    #[arg(long)]
    y_text: Option<String>,
    /// Add a vertical line that follows the cursor.
    #[arg(long)]
    cursor_line: bool,
    /// Distance between the bottom edge of the image and the x axis [default: 70]
    #[arg(long)]
    x_margin: Option<u32>,
    /// Distance between the left edge of the image and the y axis [default: 100]
    #[arg(long)]
    y_margin: Option<u32>,
    /// Distance between the image edge and the plot on sides without labels [default: 25]
    #[arg(long)]
    margins: Option<u32>,
    /// Length of the major ticks [default: 10]
    #[arg(long)]
    long_tick_len: Option<u32>,
    /// Length of the minor ticks [default: 5]
    #[arg(long)]
    short_tick_len: Option<u32>,
    /// Font size of tick labels, in points [default: 12]
    #[arg(long)]
    font_size: Option<u32>,
    /// Font size of the axis titles, in points [default: 14]
    #[arg(long)]
    label_font_size: Option<u32>,
}

impl Cli {
    fn plot_config(&self) -> Result<PlotConfig, PlotError> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|err| {
                    PlotError::ConfigFile(format!("failed to read `{}`: {err}", path.display()))
                })?;
                PlotConfig::from_json_str(&raw)?
            }
            None => PlotConfig::default(),
        };

        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = &self.$field {
                    config.$field = value.clone();
                })*
            };
        }
        apply!(
            width,
            height,
            y_first,
            y_step,
            y_last,
            x_text,
            y_text,
            x_margin,
            y_margin,
            margins,
            long_tick_len,
            short_tick_len,
            font_size,
            label_font_size,
        );
        config.template |= self.template;
        config.log |= self.log;
        config.cursor_line |= self.cursor_line;

        Ok(config)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlotError> {
    let cli = Cli::parse();
    let _ = init_default_tracing("warn");

    let config = cli.plot_config()?;
    let assets = match &cli.assets {
        Some(dir) => Assets::load_dir(dir)?,
        None => Assets::default(),
    };

    let mut generator = PlotGenerator::new(SvgRenderer::new(), config, assets)?;
    if !cli.quiet {
        eprintln!("{}", generator.diagnostics());
    }
    generator.render()?;
    let markup = generator.into_renderer().into_markup();

    match &cli.output {
        Some(path) => fs::write(path, markup).map_err(|source| PlotError::Output {
            path: path.clone(),
            source,
        }),
        None => io::stdout()
            .write_all(markup.as_bytes())
            .map_err(|source| PlotError::Output {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}
