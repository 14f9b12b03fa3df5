// File: crates/candle-chart/src/error.rs
// Summary: Error type shared by validation, rendering and PNG output.

use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("observation series is empty")]
    EmptySeries,

    #[error("observation {index} has a non-finite price")]
    NonFinite { index: usize },

    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("canvas {width}x{height} leaves no room for the plot area")]
    PlotTooSmall { width: u32, height: u32 },

    #[error("invalid candle width: {0}")]
    InvalidCandleWidth(u32),

    #[error("invalid grid: rows={rows}, columns={columns}")]
    InvalidGrid { rows: u32, columns: u32 },

    #[error("failed to allocate a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode PNG")]
    Encode,

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    /// True for errors raised by up-front validation, before any pixel is touched.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptySeries
                | Self::NonFinite { .. }
                | Self::InvalidDimensions { .. }
                | Self::PlotTooSmall { .. }
                | Self::InvalidCandleWidth(_)
                | Self::InvalidGrid { .. }
        )
    }
}
