//! Per-run bookkeeping.
//!
//! Remaining burst and completion time of every process, keyed by process
//! ID. Input records are never touched, so one batch can feed any number
//! of runs.

use std::collections::HashMap;

use tracing::info;

use super::metrics::MetricsAggregator;
use crate::dispatching::SchedulingContext;
use crate::error::Result;
use crate::models::{Process, ProcessId, ProcessOutcome, Report, Timeline};

#[derive(Debug)]
pub(crate) struct RunState {
    remaining: HashMap<ProcessId, i64>,
    completion: HashMap<ProcessId, i64>,
}

impl RunState {
    pub(crate) fn new(processes: &[Process]) -> Self {
        Self {
            remaining: processes
                .iter()
                .map(|p| (p.id, p.burst_duration))
                .collect(),
            completion: HashMap::with_capacity(processes.len()),
        }
    }

    pub(crate) fn remaining(&self, id: ProcessId) -> i64 {
        self.remaining.get(&id).copied().unwrap_or(0)
    }

    pub(crate) fn is_complete(&self, id: ProcessId) -> bool {
        self.completion.contains_key(&id)
    }

    pub(crate) fn all_complete(&self) -> bool {
        self.completion.len() == self.remaining.len()
    }

    /// Runs `id` for `units` ending at `now`; records completion when the
    /// burst is used up. Returns whether the process finished.
    pub(crate) fn run(&mut self, id: ProcessId, units: i64, now: i64) -> bool {
        let left = self.remaining.entry(id).or_insert(0);
        *left = (*left - units).max(0);
        if *left == 0 {
            self.completion.insert(id, now);
            true
        } else {
            false
        }
    }

    /// Indices of arrived, unfinished processes, in input order.
    pub(crate) fn ready(&self, processes: &[Process], clock: i64) -> Vec<usize> {
        processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_arrived(clock) && !self.is_complete(p.id))
            .map(|(i, _)| i)
            .collect()
    }

    /// Earliest arrival strictly after `clock` among unfinished processes.
    pub(crate) fn next_arrival(&self, processes: &[Process], clock: i64) -> Option<i64> {
        processes
            .iter()
            .filter(|p| !self.is_complete(p.id) && p.arrival_time > clock)
            .map(|p| p.arrival_time)
            .min()
    }

    pub(crate) fn context(&self, candidates: &[Process]) -> SchedulingContext {
        candidates
            .iter()
            .fold(SchedulingContext::new(), |ctx, p| {
                ctx.with_remaining_work(p.id, self.remaining(p.id))
            })
    }

    /// Builds the report once every process has completed.
    pub(crate) fn into_report(
        self,
        title: &str,
        processes: &[Process],
        timeline: Timeline,
    ) -> Result<Report> {
        debug_assert!(self.all_complete(), "report requested before completion");

        let rows: Vec<ProcessOutcome> = processes
            .iter()
            .filter_map(|p| {
                self.completion
                    .get(&p.id)
                    .map(|&done| ProcessOutcome::from_completion(p, done))
            })
            .collect();
        let aggregates = MetricsAggregator::from_rows(&rows).finalize()?;

        info!(
            algorithm = title,
            average_wait = aggregates.average_wait,
            average_turnaround = aggregates.average_turnaround,
            throughput = aggregates.throughput,
            "run complete"
        );

        Ok(Report {
            title: title.to_string(),
            timeline,
            rows,
            aggregates,
        })
    }
}
