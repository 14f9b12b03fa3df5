// File: crates/candle-chart/src/axis.rs
// Summary: Value-axis gridlines/labels and time-axis ticks with stacked date/time labels.

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::chart::RenderContext;
use crate::draw::Painter;
use crate::geometry::LINE_WIDTH;
use crate::grid::linspace;

pub const LABEL_SIZE: f32 = 12.0;
/// Estimated pixels per character when centring time labels under a tick.
pub const TIME_LABEL_CHAR_WIDTH: i32 = 7;
/// Extra spacing between tick labels and their anchors.
const LABEL_GAP: i32 = 5;
/// Vertical gridlines run this far below the plot.
const TICK_OVERHANG: i32 = 3;

/// Value label text, e.g. `121.50000000`.
pub fn format_value(v: f64) -> String {
    format!("{v:.8}")
}

/// Date and time labels of a tick, in UTC: (`" 2 Jan"`, `"15:04"`).
pub fn format_time(ts: i64) -> (String, String) {
    match DateTime::<Utc>::from_timestamp(ts, 0) {
        Some(d) => (d.format("%e %b").to_string(), d.format("%H:%M").to_string()),
        None => (String::new(), String::new()),
    }
}

/// Horizontal gridlines from the top of the plot down, each labelled with its value.
pub fn draw_value_axis(painter: &Painter, ctx: &RenderContext) {
    let plot = ctx.layout.plot;
    let color = ctx.config.theme.grid;
    let rows = ctx.config.rows;
    let values = linspace(ctx.scale.value_max, ctx.scale.value_min, rows as usize + 1);

    for (y, value) in ctx.layout.row_ys(rows).zip(values) {
        painter.fill_rect(plot.left, plot.right + LINE_WIDTH, y, y, color);
        painter.label(ctx.layout.label_x, y + LINE_WIDTH, &format_value(value), LABEL_SIZE, color);
    }
    trace!(rows, "value axis drawn");
}

/// Vertical ticks across the plot with a date and a time label under each.
pub fn draw_time_axis(painter: &Painter, ctx: &RenderContext) {
    let plot = ctx.layout.plot;
    let color = ctx.config.theme.grid;
    let columns = ctx.config.columns;

    for (i, x) in ctx.layout.column_xs(columns).enumerate() {
        painter.fill_rect(x, x, plot.top, plot.bottom + TICK_OVERHANG, color);

        let (date, time) = format_time(ctx.times.tick_time(i as u32, columns));
        // Both labels are offset by the date's estimated width; the time label sits one pixel right.
        let date_x = x - (date.chars().count() as i32 * TIME_LABEL_CHAR_WIDTH) / 2 + LABEL_GAP;
        let size = LABEL_SIZE as i32;
        painter.label(date_x, plot.bottom + size + LABEL_GAP, &date, LABEL_SIZE, color);
        painter.label(date_x + 1, plot.bottom + size * 2 + LABEL_GAP + 2, &time, LABEL_SIZE, color);
    }
    trace!(columns, "time axis drawn");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_labels_carry_eight_decimals() {
        assert_eq!(format_value(121.5), "121.50000000");
        assert_eq!(format_value(0.004538), "0.00453800");
    }

    #[test]
    fn time_labels_are_utc() {
        // 2014-07-18 16:00:00 UTC
        let (date, time) = format_time(1_405_699_200);
        assert_eq!(date, "18 Jul");
        assert_eq!(time, "16:00");
        let (date, _) = format_time(1_404_187_200);
        assert_eq!(date, " 1 Jul");
    }
}
