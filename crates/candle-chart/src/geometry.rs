// File: crates/candle-chart/src/geometry.rs
// Summary: Plot rectangle and label margins derived from canvas size and value-label width.

use crate::grid::int_steps;

/// Top edge of the plot; room above for the first value label.
pub const PLOT_TOP: i32 = 20;
/// Space below the plot for the stacked date/time labels.
pub const BOTTOM_MARGIN: i32 = 40;
pub const RIGHT_MARGIN: i32 = 30;
/// Left anchor of the value labels.
pub const VALUE_LABEL_X: i32 = 5 + 13 + 15;
/// Estimated pixels per value-label character at the 12pt label size.
pub const LABEL_CHAR_WIDTH: i32 = 8;
/// Characters after the integer part of a value label: the point and eight decimals, rounded up.
pub const FRACTION_CHARS: i32 = 8;
/// Gridline overhang and time-tick inset, in pixels.
pub const LINE_WIDTH: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub const fn is_empty(&self) -> bool { self.width() <= 0 || self.height() <= 0 }
}

/// Pixel layout of one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotLayout {
    /// Data area; `left` is sized so value labels never reach the gridlines.
    pub plot: RectI32,
    pub label_x: i32,
}

impl PlotLayout {
    /// `label_digits` is the widest integer part among the series' highs and lows.
    pub fn new(width: i32, height: i32, label_digits: usize) -> Self {
        let left = VALUE_LABEL_X + (label_digits as i32 + FRACTION_CHARS) * LABEL_CHAR_WIDTH;
        Self {
            plot: RectI32::from_ltrb(left, PLOT_TOP, width - RIGHT_MARGIN, height - BOTTOM_MARGIN),
            label_x: VALUE_LABEL_X,
        }
    }

    /// Rows of the `rows + 1` horizontal gridlines, top to bottom.
    pub fn row_ys(&self, rows: u32) -> impl Iterator<Item = i32> {
        int_steps(self.plot.top, self.plot.height(), rows)
    }

    /// Columns of the `columns + 1` time ticks, left to right.
    pub fn column_xs(&self, columns: u32) -> impl Iterator<Item = i32> {
        int_steps(self.plot.left + LINE_WIDTH, self.plot.width(), columns)
    }

    pub fn column_spacing(&self, columns: u32) -> i32 {
        if columns == 0 { 0 } else { self.plot.width() / columns as i32 }
    }

    /// First and last time-tick columns; the span candles are placed in.
    pub fn data_span(&self, columns: u32) -> (i32, i32) {
        let first = self.plot.left + LINE_WIDTH;
        (first, first + self.column_spacing(columns) * columns as i32)
    }
}
