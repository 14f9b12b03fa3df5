// File: crates/candle-chart/src/scale.rs
// Summary: Value/time bounds derived from a series, and the value (Y) and time (X) pixel mappings.

use tracing::warn;

use crate::error::ChartResult;
use crate::series::{integer_digits, validate_series, Candle};

/// Fraction of the raw price range added above and below the data.
pub const VALUE_PADDING: f64 = 0.05;

/// Bounds computed once per render from the series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleState {
    pub value_max: f64,
    pub value_min: f64,
    pub time_start: i64,
    pub time_end: i64,
    /// `time_end - time_start`, widened so any pair of timestamps fits.
    pub time_span: i128,
    /// Widest integer part among highs and lows, in characters.
    pub label_digits: usize,
}

impl ScaleState {
    pub fn from_candles(candles: &[Candle]) -> ChartResult<Self> {
        validate_series(candles)?;

        let mut raw_max = f64::NEG_INFINITY;
        let mut raw_min = f64::INFINITY;
        let mut label_digits = 0;
        for c in candles {
            raw_max = raw_max.max(c.high);
            raw_min = raw_min.min(c.low);
            label_digits = label_digits.max(integer_digits(c.high)).max(integer_digits(c.low));
        }

        let range = raw_max - raw_min;
        let (value_min, value_max) = if range > 0.0 {
            let pad = range * VALUE_PADDING;
            (raw_min - pad, raw_max + pad)
        } else {
            // Flat (or inverted) prices: a unit span centred on the data keeps it mid-plot.
            warn!(raw_min, raw_max, "zero value range, using unit span");
            let mid = (raw_max + raw_min) * 0.5;
            (mid - 0.5, mid + 0.5)
        };

        let time_start = candles[0].timestamp;
        let time_end = candles[candles.len() - 1].timestamp;
        Ok(Self {
            value_max,
            value_min,
            time_start,
            time_end,
            time_span: i128::from(time_end) - i128::from(time_start),
            label_digits,
        })
    }

    pub fn value_span(&self) -> f64 {
        self.value_max - self.value_min
    }
}

/// Maps prices onto rows of the plot, higher prices to smaller rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: i32,
    pub bottom_px: i32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: i32, bottom_px: i32, vmin: f64, vmax: f64) -> Self {
        Self { top_px, bottom_px, vmin, vmax }
    }

    /// Row of `v`; the pixel offset from the bottom is truncated toward zero.
    #[inline]
    pub fn to_px(&self, v: f64) -> i32 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return (self.top_px + self.bottom_px) / 2;
        }
        let pct = (v - self.vmin) / span;
        self.bottom_px - (f64::from(self.bottom_px - self.top_px) * pct) as i32
    }
}

/// Maps timestamps onto the columns between the first and last time tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start_px: i32,
    pub end_px: i32,
    pub start: i64,
    pub span: i128,
}

impl TimeScale {
    pub fn new(start_px: i32, end_px: i32, start: i64, span: i128) -> Self {
        Self { start_px, end_px, start, span }
    }

    /// Column of `t`. A zero span (single observation) maps everything to the middle of the data span.
    #[inline]
    pub fn to_px(&self, t: i64) -> i32 {
        if self.span <= 0 {
            return (self.start_px + self.end_px) / 2;
        }
        let pct = (i128::from(t) - i128::from(self.start)) as f64 / self.span as f64;
        self.start_px + (f64::from(self.end_px - self.start_px) * pct) as i32
    }

    /// Timestamp of tick `i` out of `columns` evenly spaced intervals.
    pub fn tick_time(&self, i: u32, columns: u32) -> i64 {
        if columns == 0 {
            return self.start;
        }
        // lies between start and start + span, so it fits back into i64
        let offset = self.span * i128::from(i) / i128::from(columns);
        i64::try_from(i128::from(self.start) + offset).unwrap_or(self.start)
    }
}
