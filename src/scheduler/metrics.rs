//! Run metrics aggregation.
//!
//! Accumulates wait and turnaround totals over completed processes and
//! derives the aggregate statistics of a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average wait | Σ wait / n |
//! | Average turnaround | Σ (completion - arrival) / n |
//! | Throughput | n / latest completion |

use crate::error::{Error, Result};
use crate::models::{ProcessOutcome, RunAggregates};

/// Accumulator for per-process results.
///
/// Totals are kept in `i128`: each row fits in `i64`, their sum may not.
#[derive(Debug, Clone, Default)]
pub struct MetricsAggregator {
    wait_sum: i128,
    turnaround_sum: i128,
    count: usize,
    last_completion: i64,
}

impl MetricsAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an aggregator over finished rows.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a ProcessOutcome>) -> Self {
        let mut aggregator = Self::new();
        for row in rows {
            aggregator.record(row);
        }
        aggregator
    }

    /// Adds one completed process.
    pub fn record(&mut self, row: &ProcessOutcome) {
        self.wait_sum += i128::from(row.wait_time);
        self.turnaround_sum += i128::from(row.turnaround_time);
        self.count += 1;
        self.last_completion = self.last_completion.max(row.completion_time);
    }

    /// Number of processes recorded so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Latest completion recorded so far.
    pub fn last_completion(&self) -> i64 {
        self.last_completion
    }

    /// Derives the aggregate statistics.
    pub fn finalize(&self) -> Result<RunAggregates> {
        finalize(
            self.wait_sum,
            self.turnaround_sum,
            self.count,
            self.last_completion,
        )
    }
}

/// Derives averages and throughput from raw totals.
///
/// # Errors
/// - [`Error::EmptyBatch`] when `count` is zero.
/// - [`Error::UndefinedThroughput`] when `last_completion` is not positive.
pub fn finalize(
    wait_sum: i128,
    turnaround_sum: i128,
    count: usize,
    last_completion: i64,
) -> Result<RunAggregates> {
    if count == 0 {
        return Err(Error::EmptyBatch);
    }
    if last_completion <= 0 {
        return Err(Error::UndefinedThroughput(last_completion));
    }

    let n = count as f64;
    Ok(RunAggregates {
        average_wait: wait_sum as f64 / n,
        average_turnaround: turnaround_sum as f64 / n,
        throughput: n / last_completion as f64,
    })
}
