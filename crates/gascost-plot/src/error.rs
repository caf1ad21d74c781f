// File: crates/gascost-plot/src/error.rs
// Summary: Error taxonomy for a render run; every variant is fatal.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// The input CSV is missing or cannot be read.
    #[error("input file {} not found or unreadable", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent, or a value is not an integer.
    #[error("malformed record in {}{}: {reason}", .path.display(), line_suffix(.line))]
    MalformedRecord {
        path: PathBuf,
        line: Option<u64>,
        reason: String,
    },

    /// The output directory is missing or not writable.
    #[error("failed to write chart to {}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Surface allocation or PNG encoding failed.
    #[error("failed to render chart")]
    Render(#[source] anyhow::Error),
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}
