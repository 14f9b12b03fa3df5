// File: crates/candle-chart/src/candles.rs
// Summary: Per-candle wick/body geometry and painting.

use skia_safe as skia;
use tracing::trace;

use crate::chart::RenderContext;
use crate::draw::Painter;
use crate::series::{Candle, Direction};
use crate::theme::Theme;

/// Wicks are two pixels wide, starting at the candle's column.
pub const WICK_WIDTH: i32 = 2;

/// Pixel geometry of one candle. Rows grow downward, so `high_y <= body_top <= body_bottom <= low_y`
/// for a well-formed candle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandleGeometry {
    pub x: i32,
    pub high_y: i32,
    pub body_top: i32,
    pub body_bottom: i32,
    pub low_y: i32,
    pub body_left: i32,
    pub body_right: i32,
    pub direction: Direction,
}

impl CandleGeometry {
    pub fn new(candle: &Candle, ctx: &RenderContext) -> Self {
        let x = ctx.times.to_px(candle.timestamp);
        let open_y = ctx.values.to_px(candle.open);
        let close_y = ctx.values.to_px(candle.close);
        let direction = candle.direction();
        let (body_top, body_bottom) = match direction {
            Direction::Bullish => (close_y, open_y),
            Direction::Bearish => (open_y, close_y),
        };
        let width = ctx.config.candle_width as i32;
        let body_left = x - width / 2;
        Self {
            x,
            high_y: ctx.values.to_px(candle.high),
            body_top,
            // open == close still leaves a one-row body
            body_bottom: body_bottom.max(body_top),
            low_y: ctx.values.to_px(candle.low),
            body_left,
            body_right: body_left + width - 1,
            direction,
        }
    }

    pub fn body_color(&self, theme: &Theme) -> skia::Color {
        match self.direction {
            Direction::Bullish => theme.candle_up,
            Direction::Bearish => theme.candle_down,
        }
    }
}

/// Upper wick, body, lower wick, in that order.
pub fn draw_candle(painter: &Painter, geometry: &CandleGeometry, theme: &Theme) {
    let g = geometry;
    let wick_right = g.x + WICK_WIDTH - 1;
    painter.fill_rect(g.x, wick_right, g.high_y, g.body_top, theme.wick);
    painter.fill_rect(g.body_left, g.body_right, g.body_top, g.body_bottom, g.body_color(theme));
    painter.fill_rect(g.x, wick_right, g.body_bottom, g.low_y, theme.wick);
}

pub fn draw_candles(painter: &Painter, ctx: &RenderContext, candles: &[Candle]) {
    for candle in candles {
        let geometry = CandleGeometry::new(candle, ctx);
        trace!(ts = candle.timestamp, ?geometry, "candle");
        draw_candle(painter, &geometry, &ctx.config.theme);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::{ChartConfig, YLabel};

    fn config(candle_width: u32) -> ChartConfig {
        ChartConfig {
            width: 800,
            height: 600,
            candle_width,
            rows: 5,
            columns: 7,
            theme: Theme::classic(),
            y_label: YLabel { text: String::new(), color: skia::Color::WHITE, size: 18.0 },
            output: PathBuf::from("unused.png"),
        }
    }

    fn series() -> Vec<Candle> {
        vec![
            Candle::new(1000, 110.0, 90.0, 95.0, 105.0, 1.0),
            Candle::new(2000, 120.0, 100.0, 110.0, 95.0, 1.0),
        ]
    }

    #[test]
    fn bullish_body_runs_from_close_down_to_open() {
        let cfg = config(4);
        let candles = series();
        let ctx = RenderContext::new(&candles, &cfg).unwrap();
        let g = CandleGeometry::new(&candles[0], &ctx);
        assert_eq!(g.direction, Direction::Bullish);
        assert_eq!(g.body_top, ctx.values.to_px(105.0));
        assert_eq!(g.body_bottom, ctx.values.to_px(95.0));
        assert!(g.high_y <= g.body_top && g.body_bottom <= g.low_y);
        assert_eq!(g.body_color(&cfg.theme), cfg.theme.candle_up);
    }

    #[test]
    fn bearish_body_runs_from_open_down_to_close() {
        let cfg = config(4);
        let candles = series();
        let ctx = RenderContext::new(&candles, &cfg).unwrap();
        let g = CandleGeometry::new(&candles[1], &ctx);
        assert_eq!(g.direction, Direction::Bearish);
        assert_eq!((g.body_top, g.body_bottom), (209, 454));
        assert_eq!(g.body_color(&cfg.theme), cfg.theme.candle_down);
    }

    #[test]
    fn body_is_exactly_candle_width() {
        for w in [1, 4, 5] {
            let cfg = config(w);
            let candles = series();
            let ctx = RenderContext::new(&candles, &cfg).unwrap();
            let g = CandleGeometry::new(&candles[0], &ctx);
            assert_eq!(g.body_right - g.body_left + 1, w as i32);
            assert!(g.body_left <= g.x && g.x <= g.body_right);
        }
    }

    #[test]
    fn doji_keeps_one_row_body() {
        let cfg = config(4);
        let candles = vec![
            Candle::new(0, 12.0, 8.0, 10.0, 10.0, 0.0),
            Candle::new(60, 12.0, 8.0, 9.0, 11.0, 0.0),
        ];
        let ctx = RenderContext::new(&candles, &cfg).unwrap();
        let g = CandleGeometry::new(&candles[0], &ctx);
        assert_eq!(g.body_top, g.body_bottom);
    }
}
