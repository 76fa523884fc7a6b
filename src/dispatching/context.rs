//! Scheduling context for dispatching rule evaluation.

use std::collections::HashMap;

use crate::models::ProcessId;

/// Runtime simulation state passed to dispatching rules.
///
/// Carries the remaining burst of each in-flight process.
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    /// Remaining burst per process (process_id → time units).
    pub remaining_work: HashMap<ProcessId, i64>,
}

impl SchedulingContext {
    /// Creates a context with no progress tracked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets remaining work for a process.
    pub fn with_remaining_work(mut self, process_id: ProcessId, units: i64) -> Self {
        self.remaining_work.insert(process_id, units);
        self
    }

    /// Remaining work for a process, if tracked.
    pub fn remaining(&self, process_id: ProcessId) -> Option<i64> {
        self.remaining_work.get(&process_id).copied()
    }
}
