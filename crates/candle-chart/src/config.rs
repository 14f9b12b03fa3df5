// File: crates/candle-chart/src/config.rs
// Summary: Chart configuration value object and its up-front validation.
// Notes:
// - There is no `Default`: every rendering parameter is chosen by the caller.

use std::path::PathBuf;

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::theme::Theme;

/// Vertical title drawn along the left edge.
#[derive(Clone, Debug, PartialEq)]
pub struct YLabel {
    pub text: String,
    pub color: skia::Color,
    /// Font size in points.
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Body width of each candle, in pixels.
    pub candle_width: u32,
    /// Value-axis intervals; `rows + 1` gridlines are drawn.
    pub rows: u32,
    /// Time-axis intervals; `columns + 1` ticks are drawn.
    pub columns: u32,
    pub theme: Theme,
    pub y_label: YLabel,
    /// PNG target used by `Chart::render_to_png`.
    pub output: PathBuf,
}

impl ChartConfig {
    pub fn validate(&self) -> ChartResult<()> {
        let max = i32::MAX as u32;
        if self.width == 0 || self.height == 0 || self.width > max || self.height > max {
            return Err(ChartError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.candle_width == 0 || self.candle_width > max {
            return Err(ChartError::InvalidCandleWidth(self.candle_width));
        }
        if self.rows == 0 || self.columns == 0 {
            return Err(ChartError::InvalidGrid { rows: self.rows, columns: self.columns });
        }
        Ok(())
    }

    pub(crate) fn size(&self) -> (i32, i32) {
        (self.width as i32, self.height as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChartConfig {
        ChartConfig {
            width: 800,
            height: 600,
            candle_width: 4,
            rows: 5,
            columns: 7,
            theme: Theme::classic(),
            y_label: YLabel { text: "BTS".into(), color: skia::Color::WHITE, size: 18.0 },
            output: PathBuf::from("out.png"),
        }
    }

    #[test]
    fn accepts_complete_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn rejects_zero_sizes() {
        let c = ChartConfig { width: 0, ..config() };
        assert!(matches!(c.validate(), Err(ChartError::InvalidDimensions { width: 0, .. })));
        let c = ChartConfig { candle_width: 0, ..config() };
        assert!(matches!(c.validate(), Err(ChartError::InvalidCandleWidth(0))));
        let c = ChartConfig { columns: 0, ..config() };
        let err = c.validate().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, ChartError::InvalidGrid { rows: 5, columns: 0 }));
    }

    #[test]
    fn rejects_sizes_beyond_pixel_range() {
        let c = ChartConfig { height: u32::MAX, ..config() };
        assert!(c.validate().is_err());
    }
}
