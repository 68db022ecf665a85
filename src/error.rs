use std::path::PathBuf;

use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

/// Axis identity used in extent errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for AxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid axis range: y_last ({last}) must be greater than y_first ({first})")]
    InvalidRange { first: f64, last: f64 },

    #[error("invalid axis step: y_step ({step}) must be > 0")]
    InvalidStep { step: f64 },

    #[error("{axis} axis has no room left after margins: length={length}")]
    DegenerateExtent { axis: AxisKind, length: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid config file: {0}")]
    ConfigFile(String),

    #[error("failed to read asset `{}`: {source}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{}`: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlotError {
    /// Returns `true` for errors caused by an unusable `PlotConfig`.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCanvas { .. }
                | Self::InvalidRange { .. }
                | Self::InvalidStep { .. }
                | Self::DegenerateExtent { .. }
                | Self::InvalidConfig(_)
        )
    }
}
