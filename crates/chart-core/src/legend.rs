// File: crates/chart-core/src/legend.rs
// Summary: Legend box placement and drawing (one row per series: marker + label).

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;

const PAD: f32 = 8.0;
const ROW: f32 = 18.0;
const SWATCH: f32 = 12.0;
const GAP: f32 = 6.0;
const FONT: f32 = 12.0;
/// Distance between the legend box and the plot frame.
const OFFSET: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Box of size `(w, h)` anchored in the `position` corner of `plot`.
pub fn legend_rect(plot: &RectI32, position: LegendPosition, (w, h): (f32, f32)) -> skia::Rect {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let (left, top) = match position {
        LegendPosition::UpperLeft => (l + OFFSET, t + OFFSET),
        LegendPosition::UpperRight => (r - OFFSET - w, t + OFFSET),
        LegendPosition::LowerLeft => (l + OFFSET, b - OFFSET - h),
        LegendPosition::LowerRight => (r - OFFSET - w, b - OFFSET - h),
    };
    skia::Rect::from_xywh(left, top, w, h)
}

pub(crate) fn draw_legend(
    canvas: &skia::Canvas,
    plot: &RectI32,
    position: LegendPosition,
    series: &[Series],
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    if series.is_empty() { return; }

    let label_w = shaper
        .map(|sh| series.iter().map(|s| sh.measure_width(&s.label, FONT)).fold(0.0, f32::max))
        .unwrap_or(0.0);
    let w = PAD * 2.0 + SWATCH + GAP + label_w;
    let h = PAD * 2.0 + ROW * series.len() as f32;
    let rect = legend_rect(plot, position, (w, h));

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_background);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(rect, 3.0, 3.0, &border);

    for (i, s) in series.iter().enumerate() {
        let cy = rect.top + PAD + ROW * (i as f32 + 0.5);
        s.style.draw(canvas, rect.left + PAD + SWATCH * 0.5, cy);
        if let Some(sh) = shaper {
            sh.draw_left(canvas, &s.label, rect.left + PAD + SWATCH + GAP, cy + FONT * 0.35, FONT, theme.axis_label);
        }
    }
}
