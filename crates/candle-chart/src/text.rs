// File: crates/candle-chart/src/text.rs
// Summary: Text measuring/drawing capability, with a Skia textlayout implementation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// What the chart needs from a font engine.
pub trait TextRenderer {
    /// Advance width of `text` at `size` points, in pixels.
    fn measure_width(&self, text: &str, size: f32) -> f32;
    /// Draw `text` with its baseline starting at (`x`, `y`).
    fn draw_text(&self, canvas: &skia::Canvas, x: i32, y: i32, text: &str, size: f32, color: skia::Color);
}

/// Measures every string as zero width and draws nothing.
/// Renders with it are independent of the fonts installed on the machine.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoText;

impl TextRenderer for NoText {
    fn measure_width(&self, _text: &str, _size: f32) -> f32 { 0.0 }
    fn draw_text(&self, _canvas: &skia::Canvas, _x: i32, _y: i32, _text: &str, _size: f32, _color: skia::Color) {}
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Go", "Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }
}

impl TextRenderer for TextShaper {
    fn measure_width(&self, text: &str, size: f32) -> f32 {
        // width of the longest line
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    fn draw_text(&self, canvas: &skia::Canvas, x: i32, y: i32, text: &str, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        // Paragraph draws from its top-left; shift up by the baseline offset.
        p.paint(canvas, (x as f32, y as f32 - p.alphabetic_baseline()));
    }
}
