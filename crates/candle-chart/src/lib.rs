// File: crates/candle-chart/src/lib.rs
// Summary: Core library entry point; exports the candlestick chart model and rendering API.

pub mod axis;
pub mod candles;
pub mod chart;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod series;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod title;

pub use chart::{render, Chart, RenderContext};
pub use config::{ChartConfig, YLabel};
pub use error::{ChartError, ChartResult};
pub use series::{Candle, Direction};
pub use text::{NoText, TextRenderer, TextShaper};
pub use theme::Theme;

/// Skia's color type, re-exported so callers can build themes without a direct dependency.
pub use skia_safe::Color;
