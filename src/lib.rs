//! Per-station min/mean/max over a `<station>;<value>` measurement file.
//!
//! A run folds every line into a [`Stations`] mapping, finalizes it into a
//! [`Summary`] and renders one `{station=min/mean/max, ...}` line.

use std::path::Path;

pub mod aggregate;
pub mod config;
pub mod error;
pub mod record;
pub mod report;
pub mod source;
pub mod stations;

pub use aggregate::{aggregate, aggregate_lines};
pub use config::{Options, CHUNK_SIZE, DELIMITER};
pub use error::AggregationError;
pub use record::Record;
pub use report::{render, Report, Tenths};
pub use source::Source;
pub use stations::{StationStats, StationSummary, Stations, Summary};

/// Aggregates the file at `path` and finalizes the result.
pub fn summarize_file(path: &Path, options: &Options) -> Result<Summary, AggregationError> {
    let source = Source::open(path)?;
    let stations = aggregate(source.as_bytes(), options)?;
    Ok(stations.finish())
}
