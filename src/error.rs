//! Crate error type.

use std::num::ParseIntError;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while loading or simulating a batch.
#[derive(Debug, Error)]
pub enum Error {
    /// An input field is not a 64-bit integer.
    #[error("record {record}: field `{field}` is not an integer: {value:?}")]
    Malformed {
        /// 1-based record number.
        record: usize,
        /// Field name.
        field: &'static str,
        /// Raw field text.
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A record lacks a required column.
    #[error("record {record}: missing field `{field}`")]
    MissingField {
        /// 1-based record number.
        record: usize,
        /// Field name.
        field: &'static str,
    },

    /// No processes were supplied; throughput is undefined.
    #[error("process batch is empty")]
    EmptyBatch,

    /// The batch failed integrity checks.
    #[error("invalid process batch: {}", summarize(.0))]
    InvalidBatch(Vec<ValidationError>),

    /// The latest completion is not after t=0, so throughput has no value.
    #[error("throughput undefined: last completion at t={0}")]
    UndefinedThroughput(i64),

    /// Round-robin quantum must be positive.
    #[error("quantum must be positive, got {0}")]
    InvalidQuantum(i64),

    /// Synthetic workload parameters are inconsistent.
    #[error("invalid workload: {0}")]
    InvalidWorkload(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
