// File: crates/candle-chart/src/grid.rs
// Summary: Grid/tick layout helpers.

/// `steps` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Pixel positions `start + (span / count) * i` for `i in 0..=count`.
///
/// The step is an integer division, so the last position may fall short of
/// `start + span` by up to `count - 1` pixels.
pub fn int_steps(start: i32, span: i32, count: u32) -> impl Iterator<Item = i32> {
    let step = if count == 0 { 0 } else { span / count as i32 };
    (0..=count as i32).map(move |i| start + step * i)
}
