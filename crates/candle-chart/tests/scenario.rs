// File: crates/candle-chart/tests/scenario.rs
// Purpose: Two-candle reference chart: derived bounds, candle placement and determinism.

use std::path::PathBuf;

use approx::assert_relative_eq;
use candle_chart::candles::CandleGeometry;
use candle_chart::{Candle, Chart, ChartConfig, Color, Direction, NoText, Theme, YLabel};

fn config() -> ChartConfig {
    ChartConfig {
        width: 800,
        height: 600,
        candle_width: 4,
        rows: 5,
        columns: 7,
        theme: Theme::classic(),
        y_label: YLabel { text: "BTS".into(), color: Color::WHITE, size: 18.0 },
        output: PathBuf::from("target/test_out/scenario.png"),
    }
}

fn candles() -> Vec<Candle> {
    vec![
        Candle::new(1000, 110.0, 90.0, 95.0, 105.0, 1.0),
        Candle::new(2000, 120.0, 100.0, 110.0, 95.0, 1.0),
    ]
}

#[test]
fn derived_bounds_and_candle_placement() {
    let chart = Chart::new(candles(), config()).expect("valid chart");
    let ctx = chart.context().expect("context");

    assert_relative_eq!(ctx.scale.value_max, 121.5);
    assert_relative_eq!(ctx.scale.value_min, 88.5);
    assert_eq!(ctx.scale.time_span, 1000);

    let first = CandleGeometry::new(&chart.candles()[0], &ctx);
    let second = CandleGeometry::new(&chart.candles()[1], &ctx);
    assert_eq!(first.direction, Direction::Bullish);
    assert_eq!(second.direction, Direction::Bearish);
    assert_eq!(second.body_color(&chart.config().theme), chart.config().theme.candle_down);
    assert!(first.x < second.x);

    // edge candles sit on the first and last time ticks
    assert_eq!((first.x, second.x), ctx.layout.data_span(7));
}

#[test]
fn value_mapping_hits_plot_edges() {
    let chart = Chart::new(candles(), config()).expect("valid chart");
    let ctx = chart.context().expect("context");
    let plot = ctx.layout.plot;
    assert!((ctx.values.to_px(ctx.scale.value_min) - plot.bottom).abs() <= 1);
    assert!((ctx.values.to_px(ctx.scale.value_max) - plot.top).abs() <= 1);
}

#[test]
fn rendering_is_deterministic() {
    let chart = Chart::new(candles(), config()).expect("valid chart");
    let a = chart.render_to_png_bytes(&NoText).expect("first render");
    let b = chart.render_to_png_bytes(&NoText).expect("second render");
    assert_eq!(a, b);

    let again = Chart::new(candles(), config()).expect("valid chart");
    let (px_a, ..) = chart.render_to_rgba8(&NoText).expect("rgba");
    let (px_b, ..) = again.render_to_rgba8(&NoText).expect("rgba");
    assert_eq!(px_a, px_b);
}
