//! Process (unit of work) model.
//!
//! A process is an immutable input record: it is created once when the
//! batch is loaded and never mutated by a scheduling run. All per-run
//! state (remaining time, completion) lives in the algorithms' own
//! bookkeeping, keyed by [`ProcessId`].

use serde::{Deserialize, Serialize};

/// Process identifier, unique within a batch.
pub type ProcessId = i64;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are abstract integer time units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_duration: i64,
    /// Scheduling priority (lower value = more important).
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: ProcessId, arrival_time: i64, burst_duration: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Earliest possible completion: arrival plus burst.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time + self.burst_duration
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}
