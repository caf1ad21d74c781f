// File: crates/chart-core/src/series.rs
// Summary: Scatter series model: labeled (x, y) points drawn with a marker style.

use skia_safe as skia;

/// Default marker diameter in pixels.
pub const DEFAULT_MARKER_SIZE: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    pub color: skia::Color,
    /// Diameter (circle) or side length (square), in pixels.
    pub size: f32,
}

impl MarkerStyle {
    pub fn new(shape: MarkerShape, color: skia::Color) -> Self {
        Self { shape, color, size: DEFAULT_MARKER_SIZE }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size.max(1.0);
        self
    }

    /// Draw one filled marker centered on `(x, y)`.
    pub(crate) fn draw(&self, canvas: &skia::Canvas, x: f32, y: f32) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(self.color);

        let half = self.size * 0.5;
        match self.shape {
            MarkerShape::Circle => {
                canvas.draw_circle((x, y), half, &paint);
            }
            MarkerShape::Square => {
                canvas.draw_rect(skia::Rect::from_ltrb(x - half, y - half, x + half, y + half), &paint);
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub style: MarkerStyle,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn scatter(label: impl Into<String>, data: Vec<(f64, f64)>, style: MarkerStyle) -> Self {
        Self { label: label.into(), style, data_xy: data }
    }

    /// Pair `xs[i]` with `ys[i]`; extra values on the longer side are dropped.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64], style: MarkerStyle) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::scatter(label, data, style)
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.data_xy.iter().map(|&(x, _)| x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.data_xy.iter().map(|&(_, y)| y)
    }
}
