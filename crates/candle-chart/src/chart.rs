// File: crates/candle-chart/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use skia_safe as skia;
use tracing::{debug, warn};

use crate::axis::{draw_time_axis, draw_value_axis};
use crate::candles::draw_candles;
use crate::config::ChartConfig;
use crate::draw::Painter;
use crate::error::{ChartError, ChartResult};
use crate::geometry::PlotLayout;
use crate::scale::{ScaleState, TimeScale, ValueScale};
use crate::series::{validate_series, Candle};
use crate::text::{TextRenderer, TextShaper};
use crate::title::draw_y_title;

/// Everything one render pass needs, derived fresh from the series and configuration.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub config: &'a ChartConfig,
    pub scale: ScaleState,
    pub layout: PlotLayout,
    pub values: ValueScale,
    /// Bounded by the first and last time ticks the axis pass draws.
    pub times: TimeScale,
}

impl<'a> RenderContext<'a> {
    pub fn new(candles: &[Candle], config: &'a ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let scale = ScaleState::from_candles(candles)?;
        let (width, height) = config.size();
        let layout = PlotLayout::new(width, height, scale.label_digits);
        if layout.plot.is_empty() {
            return Err(ChartError::PlotTooSmall { width: config.width, height: config.height });
        }

        let spacing = layout.column_spacing(config.columns);
        if config.candle_width as i32 >= spacing {
            warn!(candle_width = config.candle_width, spacing, "candle width reaches column spacing");
        }

        let values = ValueScale::new(layout.plot.top, layout.plot.bottom, scale.value_min, scale.value_max);
        let (start_px, end_px) = layout.data_span(config.columns);
        let times = TimeScale::new(start_px, end_px, scale.time_start, scale.time_span);
        debug!(
            value_min = scale.value_min,
            value_max = scale.value_max,
            time_start = scale.time_start,
            time_span = %scale.time_span,
            plot_left = layout.plot.left,
            "derived scale"
        );
        Ok(Self { config, scale, layout, values, times })
    }
}

pub struct Chart {
    candles: Vec<Candle>,
    config: ChartConfig,
}

impl Chart {
    /// Validates the series and configuration; nothing is drawn yet.
    pub fn new(candles: Vec<Candle>, config: ChartConfig) -> ChartResult<Self> {
        validate_series(&candles)?;
        config.validate()?;
        Ok(Self { candles, config })
    }

    pub fn candles(&self) -> &[Candle] { &self.candles }

    pub fn config(&self) -> &ChartConfig { &self.config }

    pub fn context(&self) -> ChartResult<RenderContext<'_>> {
        RenderContext::new(&self.candles, &self.config)
    }

    /// Composite background, gridlines and labels, candles, then the Y title onto a raster surface.
    pub fn render_surface(&self, text: &dyn TextRenderer) -> ChartResult<skia::Surface> {
        let ctx = self.context()?;
        let (width, height) = self.config.size();
        debug!(candles = self.candles.len(), width, height, "rendering chart");

        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        {
            let painter = Painter::new(surface.canvas(), text);
            painter.clear(self.config.theme.background);
            draw_value_axis(&painter, &ctx);
            draw_time_axis(&painter, &ctx);
            draw_candles(&painter, &ctx, &self.candles);
            draw_y_title(&painter, &self.config.y_label, height)?;
        }
        Ok(surface)
    }

    /// Render to a tightly packed, non-premultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, text: &dyn TextRenderer) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(text)?;
        let (width, height) = self.config.size();
        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, self.config.width, self.config.height, stride))
    }

    pub fn render_to_png_bytes(&self, text: &dyn TextRenderer) -> ChartResult<Vec<u8>> {
        let mut surface = self.render_surface(text)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to the configured output path.
    pub fn render_to_png(&self, text: &dyn TextRenderer) -> ChartResult<()> {
        self.render_to_png_at(&self.config.output, text)
    }

    pub fn render_to_png_at(&self, path: impl AsRef<Path>, text: &dyn TextRenderer) -> ChartResult<()> {
        let bytes = self.render_to_png_bytes(text)?;
        write_atomically(path.as_ref(), &bytes)?;
        debug!(path = %path.as_ref().display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }
}

/// Render `candles` with `config` to `config.output`, shaping text with the system fonts.
pub fn render(candles: &[Candle], config: &ChartConfig) -> ChartResult<()> {
    Chart::new(candles.to_vec(), config.clone())?.render_to_png(&TextShaper::new())
}

/// Write to a sibling temp file, then rename over `path`; a failed write leaves nothing at `path`.
fn write_atomically(path: &Path, bytes: &[u8]) -> ChartResult<()> {
    let io_err = |source| ChartError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut tmp_name = path.file_name().map(OsString::from).unwrap_or_else(|| OsString::from("chart"));
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    if let Err(source) = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(source));
    }
    Ok(())
}
