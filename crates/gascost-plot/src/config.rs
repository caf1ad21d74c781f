// File: crates/gascost-plot/src/config.rs
// Summary: Input/output locations and render options, defaulting to the workspace `output/` directory.

use std::path::{Path, PathBuf};

use chart_core::types::Insets;
use chart_core::RenderOptions;

pub const INPUT_FILE_NAME: &str = "gascosts.csv";
pub const OUTPUT_FILE_NAME: &str = "plot.png";

/// `output/` at the workspace root, two levels above this crate.
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..").join("output")
}

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub render: RenderOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let dir = default_output_dir();
        Self {
            input_path: dir.join(INPUT_FILE_NAME),
            output_path: dir.join(OUTPUT_FILE_NAME),
            render: RenderOptions {
                width: 640,
                height: 480,
                insets: Insets::new(84, 24, 44, 56),
                ..RenderOptions::default()
            },
        }
    }
}

impl RenderConfig {
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}
