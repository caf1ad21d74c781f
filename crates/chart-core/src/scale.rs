// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps a data interval onto a pixel interval. The pixel interval may run
/// backwards (Y grows downward on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub range_start: f32,
    pub range_end: f32,
}

impl LinearScale {
    pub fn new(domain_min: f64, domain_max: f64, range_start: f32, range_end: f32) -> Self {
        let mut s = Self { domain_min, domain_max, range_start, range_end };
        if (s.domain_max - s.domain_min).abs() < 1e-12 { s.domain_max = s.domain_min + 1.0; }
        s
    }

    /// Horizontal scale: `axis.min` at the left edge of `plot`.
    pub fn horizontal(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(axis.min, axis.max, plot.left as f32, plot.right as f32)
    }

    /// Vertical scale: `axis.min` at the bottom edge of `plot`.
    pub fn vertical(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(axis.min, axis.max, plot.bottom as f32, plot.top as f32)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.domain_max - self.domain_min;
        self.range_start + ((v - self.domain_min) / span) as f32 * (self.range_end - self.range_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let range = (self.range_end - self.range_start) as f64;
        if range.abs() < 1e-12 {
            return self.domain_min;
        }
        self.domain_min + ((px - self.range_start) as f64 / range) * (self.domain_max - self.domain_min)
    }
}
