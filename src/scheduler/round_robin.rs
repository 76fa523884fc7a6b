//! Round-robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! Repeated cyclic sweeps over the batch in input order. Each visit:
//! - skips the process if it has not arrived yet or has already finished;
//! - otherwise runs it for `min(remaining, quantum)` and appends one
//!   interval for that slice.
//!
//! A sweep that runs nothing means every unfinished process is still in the
//! future; the clock jumps to the next arrival.

use tracing::{debug, trace, warn};

use super::config::DEFAULT_QUANTUM;
use super::state::RunState;
use super::SchedulingAlgorithm;
use crate::error::{Error, Result};
use crate::models::{Process, Report, Timeline};
use crate::validation::check_batch;

/// Round-robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedsim::models::Process;
/// use cpu_schedsim::scheduler::{RoundRobin, SchedulingAlgorithm};
///
/// let batch = vec![Process::new(1, 0, 3), Process::new(2, 0, 2)];
/// let report = RoundRobin::new(2).unwrap().schedule(&batch).unwrap();
/// assert_eq!(report.timeline.len(), 3);
/// assert_eq!(report.completion_order(), vec![2, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a round-robin scheduler.
    ///
    /// # Errors
    /// [`Error::InvalidQuantum`] if `quantum` is not positive.
    pub fn new(quantum: i64) -> Result<Self> {
        if quantum <= 0 {
            return Err(Error::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// Time slice granted per visit.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn title(&self) -> &'static str {
        "Round-robin"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Report> {
        check_batch(processes)?;
        debug!(
            algorithm = self.name(),
            processes = processes.len(),
            quantum = self.quantum,
            "scheduling"
        );

        let mut state = RunState::new(processes);
        let mut timeline = Timeline::new();
        let mut clock = 0;

        while !state.all_complete() {
            let mut progressed = false;

            for p in processes {
                if !p.has_arrived(clock) || state.is_complete(p.id) {
                    continue;
                }

                let slice = state.remaining(p.id).min(self.quantum);
                let stop = clock + slice;
                trace!(pid = p.id, start = clock, stop, "dispatch");
                timeline.append(p.id, clock, stop);
                state.run(p.id, slice, stop);
                clock = stop;
                progressed = true;
            }

            if !progressed {
                match state.next_arrival(processes, clock) {
                    Some(next) => {
                        if !timeline.is_empty() {
                            warn!(idle_from = clock, idle_until = next, "cpu idle");
                        }
                        clock = next;
                    }
                    None => break,
                }
            }
        }

        state.into_report(self.title(), processes, timeline)
    }
}
