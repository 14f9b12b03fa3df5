// File: crates/candle-chart/src/theme.rs
// Summary: Color palettes for the chart background, gridlines and candle glyphs.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Gridlines and axis tick labels.
    pub grid: skia::Color,
    pub candle_up: skia::Color,
    pub candle_down: skia::Color,
    pub wick: skia::Color,
}

impl Theme {
    /// Yellow grid on black with green/red bodies and light grey wicks.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 255, 255, 0),
            candle_up: skia::Color::from_argb(255, 0, 255, 0),
            candle_down: skia::Color::from_argb(255, 255, 0, 0),
            wick: skia::Color::from_argb(255, 211, 211, 211),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 150, 150, 160),
            candle_up: skia::Color::from_argb(255, 40, 200, 120),
            candle_down: skia::Color::from_argb(255, 220, 80, 80),
            wick: skia::Color::from_argb(255, 180, 180, 190),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 100, 100, 110),
            candle_up: skia::Color::from_argb(255, 20, 160, 90),
            candle_down: skia::Color::from_argb(255, 200, 60, 60),
            wick: skia::Color::from_argb(255, 60, 60, 70),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x83, 0x94, 0x96),       // base0
            candle_up: skia::Color::from_argb(255, 0x2a, 0xa1, 0x98),  // cyan
            candle_down: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
            wick: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),       // base1
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::classic(),
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
    ]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
