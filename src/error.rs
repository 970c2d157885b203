use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Every error aborts the run, nothing is reported for the lines folded before it.
#[derive(Debug, Error, Diagnostic)]
pub enum AggregationError {
    #[error("line {line_number}: line does not contain exactly one `{delimiter}`: {line:?}")]
    #[diagnostic(
        code(station_stats::malformed_line),
        help("every line must be a station name and a value separated by the delimiter")
    )]
    MalformedLine {
        line_number: usize,
        line: String,
        delimiter: char,
    },

    #[error("line {line_number}: error converting value {value:?} to float: {line:?}")]
    #[diagnostic(code(station_stats::numeric_format))]
    NumericFormat {
        line_number: usize,
        line: String,
        value: String,
    },

    #[error("could not open {}", path.display())]
    #[diagnostic(code(station_stats::open))]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading line {line_number}")]
    #[diagnostic(code(station_stats::read))]
    Read {
        line_number: usize,
        #[source]
        source: io::Error,
    },
}

impl AggregationError {
    /// Line the error was raised on, if it comes from the input itself.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line_number, .. }
            | Self::NumericFormat { line_number, .. }
            | Self::Read { line_number, .. } => Some(*line_number),
            Self::Open { .. } => None,
        }
    }
}
