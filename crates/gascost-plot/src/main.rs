// File: crates/gascost-plot/src/main.rs
// Summary: Argument-free binary: renders output/gascosts.csv into output/plot.png.

use anyhow::{Context, Result};
use gascost_plot::{ChartRenderer, RenderConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let renderer = ChartRenderer::new(RenderConfig::default());
    let input = renderer.config().input_path.clone();
    let summary = renderer
        .render()
        .with_context(|| format!("failed to render gas-cost chart from '{}'", input.display()))?;

    info!(
        rows = summary.rows,
        y_max = summary.plot.y_range.1,
        output = %summary.output_path.display(),
        "done"
    );
    Ok(())
}
