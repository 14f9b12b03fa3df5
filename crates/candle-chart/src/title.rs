// File: crates/candle-chart/src/title.rs
// Summary: Vertical Y-axis title: drawn horizontally off-screen, turned a quarter counter-clockwise,
// then composited over the left margin.

use skia_safe as skia;
use tracing::{debug, warn};

use crate::config::YLabel;
use crate::draw::Painter;
use crate::error::{ChartError, ChartResult};

/// Height of the off-screen title buffer (its width after rotation).
pub const TITLE_BUFFER_HEIGHT: i32 = 16;
const TITLE_BASELINE: i32 = 15;
const TITLE_LEFT: i32 = 5;

/// Top-left corner of the rotated title on the canvas: vertically centred, 5px from the left edge.
pub fn title_origin(title_width: i32, canvas_height: i32) -> (i32, i32) {
    (TITLE_LEFT, canvas_height / 2 - title_width / 2)
}

pub fn draw_y_title(painter: &Painter, label: &YLabel, canvas_height: i32) -> ChartResult<()> {
    let width = painter.text().measure_width(&label.text, label.size).ceil() as i32;
    if width <= 0 {
        if !label.text.is_empty() {
            warn!(title = %label.text, "title measured zero width, skipping");
        }
        return Ok(());
    }

    let mut buffer = skia::surfaces::raster_n32_premul((width, TITLE_BUFFER_HEIGHT))
        .ok_or(ChartError::Surface { width, height: TITLE_BUFFER_HEIGHT })?;
    {
        let canvas = buffer.canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        painter.text().draw_text(canvas, 0, TITLE_BASELINE, &label.text, label.size, label.color);
    }
    let image = buffer.image_snapshot();

    let (left, top) = title_origin(width, canvas_height);
    debug!(width, left, top, "compositing y-axis title");
    let canvas = painter.canvas();
    canvas.save();
    // buffer (x, y) lands on (left + y, top + width - x)
    canvas.translate((left as f32, (top + width) as f32));
    canvas.rotate(-90.0, None);
    // default blending is src-over, so the transparent buffer keeps the background
    canvas.draw_image(&image, (0.0, 0.0), None);
    canvas.restore();
    Ok(())
}
