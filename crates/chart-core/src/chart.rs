// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (RGBA / PNG) using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::legend::{draw_legend, LegendPosition};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, WIDTH, HEIGHT};
use crate::view::ViewState;
use crate::Axis;

/// Upper bound on grid intervals per axis.
const MAX_TICKS: usize = 8;
const TICK_FONT: f32 = 11.0;
const LABEL_FONT: f32 = 13.0;
const TITLE_FONT: f32 = 15.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels, tick labels and legend text.
    /// Off gives font-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<LegendPosition>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data. With `y_floor`, the lower Y bound is pinned
    /// there and the upper bound kept as computed.
    pub fn autoscale_axes(&mut self, y_floor: Option<f64>) -> ViewState {
        let mut view = ViewState::from_chart(self);
        if let Some(floor) = y_floor {
            view = view.with_y_floor(floor);
        }
        view.apply_to_chart(self);
        debug!(
            x_min = view.x_min, x_max = view.x_max, y_min = view.y_min, y_max = view.y_max,
            "autoscaled axes"
        );
        view
    }

    /// Render into a tightly packed RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.rasterize(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back raster pixels");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            anyhow::bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let shaper = opts.draw_labels.then(TextShaper::new);
        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::horizontal(&self.x_axis, &plot);
        let sy = LinearScale::vertical(&self.y_axis, &plot);

        canvas.clear(theme.background);
        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &bg);

        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme);

        // Series, clipped to the plot frame
        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, false);
        for s in &self.series {
            draw_scatter_series(canvas, &sx, &sy, s);
        }
        canvas.restore();

        draw_frame(canvas, &plot, theme);

        if let Some(sh) = shaper.as_ref() {
            draw_tick_labels(canvas, sh, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme);
            draw_axis_labels(canvas, sh, &plot, &self.x_axis, &self.y_axis, theme);
            if let Some(title) = &self.title {
                sh.draw_centered(canvas, title, plot.center_x(), plot.top as f32 - 14.0, TITLE_FONT, theme.title);
            }
        }

        if let Some(position) = self.legend {
            draw_legend(canvas, &plot, position, &self.series, theme, shaper.as_ref());
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // verticals
    for v in nice_ticks(x.min, x.max, MAX_TICKS) {
        let px = sx.to_px(v);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for v in nice_ticks(y.min, y.max, MAX_TICKS) {
        let py = sy.to_px(v);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    canvas.draw_rect(plot.to_skia(), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let mut tick = skia::Paint::default();
    tick.set_color(theme.axis_line);
    tick.set_stroke_width(1.0);

    let b = plot.bottom as f32;
    let x_step = nice_step(x.span(), MAX_TICKS);
    for v in nice_ticks(x.min, x.max, MAX_TICKS) {
        let px = sx.to_px(v);
        canvas.draw_line((px, b), (px, b + 4.0), &tick);
        shaper.draw_centered(canvas, &format_tick(v, x_step), px, b + 18.0, TICK_FONT, theme.tick);
    }

    let l = plot.left as f32;
    let y_step = nice_step(y.span(), MAX_TICKS);
    for v in nice_ticks(y.min, y.max, MAX_TICKS) {
        let py = sy.to_px(v);
        canvas.draw_line((l - 4.0, py), (l, py), &tick);
        shaper.draw_right(canvas, &format_tick(v, y_step), l - 7.0, py + TICK_FONT * 0.35, TICK_FONT, theme.tick);
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) {
    shaper.draw_centered(canvas, &x.label, plot.center_x(), plot.bottom as f32 + 40.0, LABEL_FONT, theme.axis_label);
    shaper.draw_vertical(canvas, &y.label, plot.left as f32 - 66.0, plot.center_y(), LABEL_FONT, theme.axis_label);
}

fn draw_scatter_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() { continue; }
        series.style.draw(canvas, sx.to_px(x), sy.to_px(y));
    }
}
