//! Run report model.
//!
//! A report is the complete result of one algorithm run: its Gantt
//! timeline, one result row per process and the aggregate statistics.
//! Rendering is left to the `render` module or any other consumer.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Timeline};

/// Per-process result row.
///
/// Invariant: `completion_time == arrival_time + wait_time + burst_duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub id: ProcessId,
    /// Priority copied from the input record.
    pub priority: i64,
    /// Burst duration copied from the input record.
    pub burst_duration: i64,
    /// Arrival time copied from the input record.
    pub arrival_time: i64,
    /// Time spent eligible but not executing.
    pub wait_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Time unit at which the last burst unit finished.
    pub completion_time: i64,
}

impl ProcessOutcome {
    /// Derives the row for a process that finished at `completion_time`.
    pub fn from_completion(process: &Process, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id,
            priority: process.priority,
            burst_duration: process.burst_duration,
            arrival_time: process.arrival_time,
            wait_time: turnaround_time - process.burst_duration,
            turnaround_time,
            completion_time,
        }
    }
}

/// Aggregate statistics of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunAggregates {
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Processes completed per time unit, measured at the last completion.
    pub throughput: f64,
}

/// Complete result of one algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Human-readable algorithm title.
    pub title: String,
    /// Execution intervals in decision order.
    pub timeline: Timeline,
    /// One row per process, in input order.
    pub rows: Vec<ProcessOutcome>,
    /// Aggregate statistics.
    pub aggregates: RunAggregates,
}

impl Report {
    /// Finds the row of a process.
    pub fn row_for(&self, id: ProcessId) -> Option<&ProcessOutcome> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Latest completion time across all rows (0 when empty).
    pub fn last_completion(&self) -> i64 {
        self.rows
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Process ids ordered by completion time (ties keep row order).
    pub fn completion_order(&self) -> Vec<ProcessId> {
        let mut rows: Vec<&ProcessOutcome> = self.rows.iter().collect();
        rows.sort_by_key(|r| r.completion_time);
        rows.into_iter().map(|r| r.id).collect()
    }

    /// Waits of all rows, in row order.
    pub fn wait_times(&self) -> Vec<i64> {
        self.rows.iter().map(|r| r.wait_time).collect()
    }
}
