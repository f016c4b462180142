//! Error types for tsvconvlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a report
#[derive(Error, Debug)]
pub enum TsvconvError {
    /// Failed to read the input report
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A data line matched, but one of its numeric fields is not a number
    #[error("could not parse {field} '{token}' on line {line_number}: {line}")]
    InvalidNumber {
        field: NumericField,
        token: String,
        line_number: usize,
        line: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The numeric fields of a data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Value,
    Error,
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericField::Value => f.write_str("value"),
            NumericField::Error => f.write_str("error"),
        }
    }
}
