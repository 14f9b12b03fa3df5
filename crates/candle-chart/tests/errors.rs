// File: crates/candle-chart/tests/errors.rs
// Purpose: Invalid input fails before any output exists; write failures surface as errors.

use std::path::PathBuf;

use candle_chart::{Candle, Chart, ChartConfig, ChartError, Color, NoText, Theme, YLabel};

fn config(output: &str) -> ChartConfig {
    ChartConfig {
        width: 800,
        height: 600,
        candle_width: 4,
        rows: 5,
        columns: 7,
        theme: Theme::classic(),
        y_label: YLabel { text: "X".into(), color: Color::WHITE, size: 18.0 },
        output: PathBuf::from(output),
    }
}

fn one() -> Vec<Candle> {
    vec![Candle::new(0, 2.0, 1.0, 1.2, 1.8, 0.0)]
}

#[test]
fn empty_series_is_invalid_input() {
    let err = Chart::new(Vec::new(), config("target/test_out/never.png")).err().expect("must fail");
    assert!(matches!(err, ChartError::EmptySeries));
    assert!(err.is_invalid_input());
}

#[test]
fn bad_config_is_rejected_up_front() {
    for cfg in [
        ChartConfig { height: 0, ..config("x.png") },
        ChartConfig { candle_width: 0, ..config("x.png") },
        ChartConfig { rows: 0, ..config("x.png") },
    ] {
        let err = Chart::new(one(), cfg).err().expect("must fail");
        assert!(err.is_invalid_input(), "{err}");
    }
}

#[test]
fn too_small_canvas_leaves_no_file() {
    let out = "target/test_out/too_small.png";
    let _ = std::fs::remove_file(out);
    let chart = Chart::new(one(), ChartConfig { width: 120, height: 50, ..config(out) }).expect("fields valid");
    let err = chart.render_to_png(&NoText).expect_err("plot area is empty");
    assert!(matches!(err, ChartError::PlotTooSmall { width: 120, height: 50 }));
    assert!(!std::path::Path::new(out).exists());
}

#[test]
fn unwritable_target_is_reported() {
    let blocker = PathBuf::from("target/test_out/blocker");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, b"not a directory").unwrap();

    let chart = Chart::new(one(), config("target/test_out/blocker/out.png")).expect("valid chart");
    let err = chart.render_to_png(&NoText).expect_err("parent is a file");
    assert!(matches!(err, ChartError::Io { .. }));
    assert!(!err.is_invalid_input());
}
