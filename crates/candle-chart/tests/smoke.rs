// File: crates/candle-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG with real text shaping.

use candle_chart::{Candle, Chart, ChartConfig, Color, TextShaper, Theme, YLabel};

fn sample() -> Vec<Candle> {
    (0..24)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.7).sin() * 5.0;
            let (open, close) = if i % 3 == 0 { (base + 1.0, base - 1.0) } else { (base - 1.0, base + 1.5) };
            Candle::new(1_700_000_000 + i * 14_400, base + 3.0, base - 3.0, open, close, 10.0)
        })
        .collect()
}

#[test]
fn render_smoke_png() {
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    let _ = std::fs::remove_file(&out);
    let config = ChartConfig {
        width: 800,
        height: 600,
        candle_width: 4,
        rows: 5,
        columns: 7,
        theme: Theme::classic(),
        y_label: YLabel { text: "BitShares coin (BTS)".into(), color: Color::WHITE, size: 18.0 },
        output: out.clone(),
    };
    let chart = Chart::new(sample(), config).expect("valid chart");

    chart.render_to_png(&TextShaper::new()).expect("render should succeed");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (800, 600));

    // no temp file left behind
    assert!(!out.with_file_name("smoke.png.tmp").exists());
}

#[test]
fn one_shot_render_writes_configured_target() {
    let out = std::path::PathBuf::from("target/test_out/nested/one_shot.png");
    let _ = std::fs::remove_file(&out);
    let config = ChartConfig {
        width: 640,
        height: 480,
        candle_width: 3,
        rows: 4,
        columns: 6,
        theme: Theme::dark(),
        y_label: YLabel { text: "Price".into(), color: Color::WHITE, size: 18.0 },
        output: out.clone(),
    };
    candle_chart::render(&sample(), &config).expect("render");
    let img = image::open(&out).expect("decode written png");
    assert_eq!((img.width(), img.height()), (640, 480));
}
