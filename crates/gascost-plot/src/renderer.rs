// File: crates/gascost-plot/src/renderer.rs
// Summary: ChartRenderer: CSV dataset -> two-series scatter chart -> PNG written in one atomic step.

use std::io::Write;
use std::path::{Path, PathBuf};

use chart_core::{Chart, LegendPosition, MarkerShape, MarkerStyle, Series};
use skia_safe::Color;
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::dataset::Dataset;
use crate::error::PlotError;

pub const TITLE: &str = "Gas cost comparison: raffle vs auction";
pub const X_LABEL: &str = "number of entries";
pub const Y_LABEL: &str = "gas cost";
pub const AUCTION_LABEL: &str = "auction cost";
pub const RAFFLE_LABEL: &str = "raffle cost";

/// Marker edge in pixels; roughly a 10pt^2 scatter marker at 100 dpi.
const MARKER_SIZE: f32 = 4.5;

/// Unix mode of the written PNG.
#[cfg(unix)]
pub const OUTPUT_MODE: u32 = 0o644;

/// Coordinates handed to the chart, in plotting order.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotData {
    pub x: Vec<f64>,
    pub auction: Vec<f64>,
    pub raffle: Vec<f64>,
    /// Final (lower, upper) bounds of the y axis.
    pub y_range: (f64, f64),
}

#[derive(Clone, Debug)]
pub struct RenderSummary {
    pub rows: usize,
    pub output_path: PathBuf,
    pub plot: PlotData,
}

pub struct ChartRenderer {
    config: RenderConfig,
}

impl ChartRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Load the input, draw the comparison chart and replace the output PNG.
    /// On error the output path is left exactly as it was.
    pub fn render(&self) -> Result<RenderSummary, PlotError> {
        let input = &self.config.input_path;
        let dataset = Dataset::load(input)?;
        info!(path = %input.display(), rows = dataset.len(), "loaded gas costs");

        let (chart, plot) = build_chart(&dataset);
        debug!(y_min = plot.y_range.0, y_max = plot.y_range.1, "chart assembled");

        let bytes = chart.render_to_png_bytes(&self.config.render).map_err(PlotError::Render)?;
        write_atomically(&self.config.output_path, &bytes)?;
        info!(path = %self.config.output_path.display(), bytes = bytes.len(), "wrote chart");

        Ok(RenderSummary {
            rows: dataset.len(),
            output_path: self.config.output_path.clone(),
            plot,
        })
    }
}

/// Assemble the scatter chart for `dataset`: raffle costs as blue squares,
/// auction costs as red circles, y axis floored at zero.
pub fn build_chart(dataset: &Dataset) -> (Chart, PlotData) {
    let x = dataset.bid_numbers();
    let auction = dataset.auction_costs();
    let raffle = dataset.raffle_costs();

    let mut chart = Chart::new();
    chart.set_title(TITLE);
    chart.x_axis.set_label(X_LABEL);
    chart.y_axis.set_label(Y_LABEL);
    chart.add_series(Series::from_columns(
        RAFFLE_LABEL,
        &x,
        &raffle,
        MarkerStyle::new(MarkerShape::Square, Color::BLUE).with_size(MARKER_SIZE),
    ));
    chart.add_series(Series::from_columns(
        AUCTION_LABEL,
        &x,
        &auction,
        MarkerStyle::new(MarkerShape::Circle, Color::RED).with_size(MARKER_SIZE),
    ));
    chart.legend = Some(LegendPosition::LowerLeft);

    let view = chart.autoscale_axes(Some(0.0));
    let plot = PlotData { x, auction, raffle, y_range: (view.y_min, view.y_max) };
    (chart, plot)
}

/// Write `bytes` to a temporary file beside `path`, then rename it into place.
/// The directory must already exist.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), PlotError> {
    let fail = |source: std::io::Error| PlotError::OutputWriteFailure { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".plot-")
        .suffix(".png.tmp")
        .tempfile_in(dir)
        .map_err(fail)?;
    tmp.write_all(bytes).map_err(fail)?;
    // tempfile creates owner-only files; the chart is meant to be shared.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file().set_permissions(std::fs::Permissions::from_mode(OUTPUT_MODE)).map_err(fail)?;
    }
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;
    Ok(())
}
