//! First-come, first-serve.
//!
//! # Algorithm
//!
//! Non-preemptive, single pass in input order (the batch is assumed to be
//! in arrival order already; no sort is performed):
//! 1. `start = max(clock, arrival)`
//! 2. `wait = start - arrival`
//! 3. one interval `[start, start + burst)`, then `clock = start + burst`
//!
//! Without idle gaps the clock equals the burst time consumed so far.

use tracing::{debug, trace, warn};

use super::state::RunState;
use super::SchedulingAlgorithm;
use crate::error::Result;
use crate::models::{Process, Report, Timeline};
use crate::validation::check_batch;

/// First-come, first-serve scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedsim::models::Process;
/// use cpu_schedsim::scheduler::{FirstComeFirstServe, SchedulingAlgorithm};
///
/// let batch = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 2, 3),
///     Process::new(3, 4, 2),
/// ];
/// let report = FirstComeFirstServe.schedule(&batch).unwrap();
/// assert_eq!(report.wait_times(), vec![0, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstComeFirstServe;

impl SchedulingAlgorithm for FirstComeFirstServe {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn title(&self) -> &'static str {
        "First-come, first-serve"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Report> {
        check_batch(processes)?;
        debug!(algorithm = self.name(), processes = processes.len(), "scheduling");

        let mut state = RunState::new(processes);
        let mut timeline = Timeline::new();
        let mut clock = 0;

        for p in processes {
            let start = clock.max(p.arrival_time);
            if start > clock && !timeline.is_empty() {
                warn!(idle_from = clock, idle_until = start, "cpu idle");
            }

            let stop = start + p.burst_duration;
            trace!(pid = p.id, start, stop, "dispatch");
            timeline.append(p.id, start, stop);
            state.run(p.id, p.burst_duration, stop);
            clock = stop;
        }

        state.into_report(self.title(), processes, timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::ExecutionInterval;

    fn sample_batch() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 2, 3),
            Process::new(3, 4, 2),
        ]
    }

    #[test]
    fn test_fcfs_reference_batch() {
        let report = FirstComeFirstServe.schedule(&sample_batch()).unwrap();

        assert_eq!(report.wait_times(), vec![0, 3, 4]);
        let completions: Vec<_> = report.rows.iter().map(|r| r.completion_time).collect();
        assert_eq!(completions, vec![5, 8, 10]);
        assert_eq!(format!("{:.2}", report.aggregates.average_wait), "2.33");
        assert!((report.aggregates.throughput - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_one_interval_per_process() {
        let report = FirstComeFirstServe.schedule(&sample_batch()).unwrap();
        assert_eq!(
            report.timeline.intervals(),
            &[
                ExecutionInterval::new(1, 0, 5),
                ExecutionInterval::new(2, 5, 8),
                ExecutionInterval::new(3, 8, 10),
            ]
        );
    }

    #[test]
    fn test_fcfs_keeps_input_order() {
        // Longer job first in input → runs first regardless of burst.
        let batch = vec![Process::new(1, 0, 9), Process::new(2, 0, 1)];
        let report = FirstComeFirstServe.schedule(&batch).unwrap();
        assert_eq!(report.completion_order(), vec![1, 2]);
        assert_eq!(report.row_for(2).unwrap().wait_time, 9);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let batch = vec![Process::new(1, 0, 2), Process::new(2, 5, 3)];
        let report = FirstComeFirstServe.schedule(&batch).unwrap();
        let row = report.row_for(2).unwrap();
        assert_eq!(row.wait_time, 0);
        assert_eq!(row.completion_time, 8);
        assert_eq!(report.timeline.intervals()[1], ExecutionInterval::new(2, 5, 8));
    }

    #[test]
    fn test_fcfs_first_process_late_arrival() {
        let report = FirstComeFirstServe
            .schedule(&[Process::new(1, 3, 4)])
            .unwrap();
        let row = &report.rows[0];
        assert_eq!(row.wait_time, 0);
        assert_eq!(row.turnaround_time, 4);
        assert_eq!(row.completion_time, 7);
    }

    #[test]
    fn test_fcfs_empty_batch() {
        assert!(matches!(
            FirstComeFirstServe.schedule(&[]),
            Err(Error::EmptyBatch)
        ));
    }
}
