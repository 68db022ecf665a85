pub mod axis;
pub mod scale;
pub mod time_axis;
pub mod types;
pub mod value_axis;

pub use axis::{
    AxisExtent, ValueRange, format_log_label, format_number, format_stepped_number, to_pixel,
};
pub use scale::{ScaleKind, ScaleTick};
pub use time_axis::{HourDivision, TickLengths, build_time_axis};
pub use types::{AxisGeometry, BoundingBox, GeometryBundle, GridLine, Label, Tick};
pub use value_axis::{ValueAxisSpec, build_value_axis};
