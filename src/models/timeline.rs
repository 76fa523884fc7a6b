//! Gantt timeline model.
//!
//! A timeline is the append-only sequence of execution intervals produced
//! by one scheduling run, in the order the dispatch decisions were made.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// A contiguous stretch of CPU time given to one process.
///
/// Covers `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// First time unit of the interval (inclusive).
    pub start: i64,
    /// End of the interval (exclusive).
    pub stop: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: ProcessId, start: i64, stop: i64) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Chronological sequence of execution intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval as a separate entry.
    pub fn append(&mut self, process_id: ProcessId, start: i64, stop: i64) {
        self.intervals
            .push(ExecutionInterval::new(process_id, start, stop));
    }

    /// Appends an interval, merging it into the last entry when the same
    /// process continues without a gap.
    pub fn extend_or_append(&mut self, process_id: ProcessId, start: i64, stop: i64) {
        if let Some(last) = self.intervals.last_mut() {
            if last.process_id == process_id && last.stop == start {
                last.stop = stop;
                return;
            }
        }
        self.append(process_id, start, stop);
    }

    /// All intervals in decision order.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    /// Iterates over intervals in decision order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval has been recorded.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Intervals attributed to one process.
    pub fn intervals_for(&self, process_id: ProcessId) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Total CPU time given to one process.
    pub fn busy_time_for(&self, process_id: ProcessId) -> i64 {
        self.intervals_for(process_id)
            .iter()
            .map(|i| i.duration())
            .sum()
    }

    /// Latest stop across all intervals (0 when empty).
    pub fn end_time(&self) -> i64 {
        self.intervals.iter().map(|i| i.stop).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
