// File: crates/gascost-plot/src/lib.rs
// Summary: Library entry point for the gas-cost comparison chart renderer.

pub mod config;
pub mod dataset;
pub mod error;
pub mod renderer;

pub use config::RenderConfig;
pub use dataset::{Dataset, Record};
pub use error::PlotError;
pub use renderer::{build_chart, ChartRenderer, PlotData, RenderSummary};
