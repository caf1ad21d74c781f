// File: crates/gascost-plot/src/dataset.rs
// Summary: Loads gas-cost rows from CSV, keyed by header name, preserving file order.

use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::PlotError;

pub const BID_NUMBER: &str = "bidNumber";
pub const AUCTION_COST: &str = "batchAuctionCost";
pub const RAFFLE_COST: &str = "multiRaffleCost";

/// Header fields every input file must carry. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = [BID_NUMBER, AUCTION_COST, RAFFLE_COST];

/// One measurement row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "bidNumber")]
    pub bid_number: i64,
    #[serde(rename = "batchAuctionCost")]
    pub auction_cost: i64,
    #[serde(rename = "multiRaffleCost")]
    pub raffle_cost: i64,
}

/// All rows of one input file, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Read and parse `path`. The file handle is dropped before returning.
    pub fn load(path: &Path) -> Result<Self, PlotError> {
        let rdr = reader_builder().from_path(path).map_err(|source| PlotError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        read_records(rdr, path)
    }

    /// Parse CSV from any reader; `origin` only labels errors.
    pub fn from_reader<R: io::Read>(reader: R, origin: &Path) -> Result<Self, PlotError> {
        read_records(reader_builder().from_reader(reader), origin)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Column accessors widen i64 -> f64 for plotting; exact up to 2^53.
    pub fn bid_numbers(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.bid_number as f64).collect()
    }

    pub fn auction_costs(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.auction_cost as f64).collect()
    }

    pub fn raffle_costs(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.raffle_cost as f64).collect()
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

fn read_records<R: io::Read>(mut rdr: csv::Reader<R>, origin: &Path) -> Result<Dataset, PlotError> {
    let headers = rdr.headers().map_err(|e| classify(e, origin))?.clone();
    debug!(headers = ?headers.iter().collect::<Vec<_>>(), "read csv headers");

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|want| !headers.iter().any(|h| h == *want))
        .collect();
    if !missing.is_empty() {
        return Err(PlotError::MalformedRecord {
            path: origin.to_path_buf(),
            line: Some(1),
            reason: format!("missing required column(s): {}", missing.join(", ")),
        });
    }

    let mut records = Vec::new();
    for rec in rdr.deserialize::<Record>() {
        records.push(rec.map_err(|e| classify(e, origin))?);
    }
    Ok(Dataset { records })
}

/// I/O failures mean the input could not be read; everything else is a
/// problem with the file's contents.
fn classify(err: csv::Error, origin: &Path) -> PlotError {
    let line = err.position().map(|p| p.line());
    if matches!(err.kind(), csv::ErrorKind::Io(_)) {
        return PlotError::InputNotFound { path: origin.to_path_buf(), source: err };
    }
    let reason = match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    };
    PlotError::MalformedRecord { path: origin.to_path_buf(), line, reason }
}
