// File: crates/candle-chart/src/draw.rs
// Summary: Pixel-exact rectangle fills and text placement on a Skia canvas.

use skia_safe as skia;

use crate::text::TextRenderer;

/// Primitive drawing on one canvas. Rectangles are inclusive on all four edges,
/// painted without anti-aliasing, and replace the pixels under them.
pub struct Painter<'a> {
    canvas: &'a skia::Canvas,
    text: &'a dyn TextRenderer,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a skia::Canvas, text: &'a dyn TextRenderer) -> Self {
        Self { canvas, text }
    }

    pub fn canvas(&self) -> &'a skia::Canvas { self.canvas }

    pub fn text(&self) -> &'a dyn TextRenderer { self.text }

    pub fn clear(&self, color: skia::Color) {
        self.canvas.clear(color);
    }

    /// Paint every pixel of `[x1, x2] x [y1, y2]`. Reversed bounds paint nothing.
    pub fn fill_rect(&self, x1: i32, x2: i32, y1: i32, y2: i32, color: skia::Color) {
        if x1 > x2 || y1 > y2 {
            return;
        }
        let mut paint = skia::Paint::default();
        paint.set_color(color);
        paint.set_anti_alias(false);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_blend_mode(skia::BlendMode::Src);
        let rect = skia::IRect::from_ltrb(x1, y1, x2.saturating_add(1), y2.saturating_add(1));
        self.canvas.draw_irect(rect, &paint);
    }

    /// Hollow rectangle whose border is `thickness` pixels wide, inside `[x1, x2] x [y1, y2]`.
    pub fn outline_rect(&self, x1: i32, x2: i32, y1: i32, y2: i32, thickness: i32, color: skia::Color) {
        if thickness <= 0 {
            return;
        }
        let t = thickness - 1;
        self.fill_rect(x1, x2, y1, y1 + t, color);
        self.fill_rect(x1, x2, y2 - t, y2, color);
        self.fill_rect(x1, x1 + t, y1, y2, color);
        self.fill_rect(x2 - t, x2, y1, y2, color);
    }

    /// Text with its baseline starting at (`x`, `y`).
    pub fn label(&self, x: i32, y: i32, text: &str, size: f32, color: skia::Color) {
        self.text.draw_text(self.canvas, x, y, text, size, color);
    }
}
