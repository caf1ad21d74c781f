// File: crates/chart-core/src/view.rs
// Visible ranges derived from series data, with a margin and an optional Y floor.

use crate::series::Series;
use crate::Chart;

/// Fraction of the data span added on each side when autoscaling.
pub const DEFAULT_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 }
    }
}

impl ViewState {
    pub fn from_chart(chart: &Chart) -> Self {
        Self::from_series(&chart.series, DEFAULT_MARGIN)
    }

    /// Extents of every point in `series`, padded by `margin` x span.
    /// No finite points gives the unit square; a zero-width extent is widened
    /// to one unit centered on the data.
    pub fn from_series(series: &[Series], margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for &(x, y) in &s.data_xy {
                if !x.is_finite() || !y.is_finite() { continue; }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self::default();
        }
        let (x_min, x_max) = widen(x_min, x_max);
        let (y_min, y_max) = widen(y_min, y_max);
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        Self { x_min: x_min - xm, x_max: x_max + xm, y_min: y_min - ym, y_max: y_max + ym }
    }

    /// Pin the lower Y bound to `floor`, keeping the upper bound unless it
    /// would no longer lie above the floor.
    pub fn with_y_floor(mut self, floor: f64) -> Self {
        self.y_min = floor;
        if self.y_max <= floor {
            self.y_max = floor + 1.0;
        }
        self
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

fn widen(min: f64, max: f64) -> (f64, f64) {
    if (max - min).abs() < 1e-9 { (min - 0.5, max + 0.5) } else { (min, max) }
}
