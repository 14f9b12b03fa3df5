// File: crates/candle-chart/src/series.rs
// Summary: Observation model (OHLC + volume + timestamp) and candle direction.
// Notes:
// - The render path does not enforce the OHLC ordering invariant; `Candle::try_new`
//   is offered to callers that want it checked at construction time.
// - Serde field names follow the Poloniex `returnChartData` payload so cached
//   responses deserialize directly.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Seconds since the Unix epoch.
    #[serde(rename = "date")]
    pub timestamp: i64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

/// Which way price moved over a candle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `open <= close`
    Bullish,
    /// `open > close`
    Bearish,
}

impl Candle {
    pub const fn new(timestamp: i64, high: f64, low: f64, open: f64, close: f64, volume: f64) -> Self {
        Self { timestamp, high, low, open, close, volume }
    }

    /// Try to construct a candle enforcing OHLC invariants:
    /// low <= min(open,close) and high >= max(open,close).
    pub fn try_new(
        timestamp: i64,
        high: f64,
        low: f64,
        open: f64,
        close: f64,
        volume: f64,
    ) -> Result<Self, &'static str> {
        let lo = open.min(close);
        let hi = open.max(close);
        if low > lo { return Err("low above min(open,close)"); }
        if high < hi { return Err("high below max(open,close)"); }
        Ok(Self::new(timestamp, high, low, open, close, volume))
    }

    pub fn direction(&self) -> Direction {
        if self.open > self.close { Direction::Bearish } else { Direction::Bullish }
    }

    fn is_finite(&self) -> bool {
        self.high.is_finite() && self.low.is_finite() && self.open.is_finite() && self.close.is_finite()
    }
}

/// Reject series the renderer cannot lay out: empty, or carrying NaN/inf prices.
pub fn validate_series(candles: &[Candle]) -> ChartResult<()> {
    if candles.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    if let Some(index) = candles.iter().position(|c| !c.is_finite()) {
        return Err(ChartError::NonFinite { index });
    }
    Ok(())
}

/// Number of characters in the integer part of `v`, sign included.
pub(crate) fn integer_digits(v: f64) -> usize {
    (v.trunc() as i64).to_string().len()
}
