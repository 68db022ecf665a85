//! Plot assembly entry points.

mod diagnostics;
mod generator;
mod layout;
mod plot_config;

pub use diagnostics::PlotDiagnostics;
pub use generator::PlotGenerator;
pub use layout::{assemble_layout, assemble_layouts};
pub use plot_config::{MAX_VALUE_DIVISIONS, PlotConfig};
