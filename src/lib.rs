//! svg-plot-gen: SVG plot scaffolding for time-of-day data.
//!
//! The crate lays out a plot with a fixed 24-hour horizontal axis and a
//! linear or logarithmic vertical axis, then writes grid lines, ticks,
//! labels and an empty data path as a standalone SVG document.
//!
//! Layout is pure: [`api::assemble_layout`] turns a [`PlotConfig`] into a
//! [`core::GeometryBundle`], and any [`render::Renderer`] turns that into a
//! document.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PlotConfig, PlotGenerator};
pub use error::{PlotError, PlotResult};
