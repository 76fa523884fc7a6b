//! Rule-driven dispatch: shortest-job-first and priority scheduling.
//!
//! # Algorithm
//!
//! 1. Collect arrived, unfinished processes (in input order).
//! 2. Order a working copy of them with the rule engine (stable sort).
//! 3. Run the best one: to completion when non-preemptive, for one time
//!    unit when preemptive.
//! 4. If nothing is ready, jump the clock to the next arrival.
//!
//! Per-run state lives in [`RunState`], keyed by process ID, so the
//! caller's batch is never reordered or mutated.

use tracing::{debug, trace, warn};

use super::state::RunState;
use super::SchedulingAlgorithm;
use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::{Process, Report, Timeline};
use crate::validation::check_batch;

/// Shortest-job-first scheduler.
///
/// Non-preemptive by default. With preemption enabled it becomes
/// shortest-remaining-time-first.
///
/// # Example
///
/// ```
/// use cpu_schedsim::models::Process;
/// use cpu_schedsim::scheduler::{SchedulingAlgorithm, ShortestJobFirst};
///
/// let batch = vec![
///     Process::new(1, 0, 6),
///     Process::new(2, 0, 2),
///     Process::new(3, 0, 4),
/// ];
/// let report = ShortestJobFirst::new().schedule(&batch).unwrap();
/// assert_eq!(report.completion_order(), vec![2, 3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ShortestJobFirst {
    preemptive: bool,
    engine: RuleEngine,
}

impl ShortestJobFirst {
    /// Creates a non-preemptive SJF scheduler.
    pub fn new() -> Self {
        Self::with_preemption(false)
    }

    /// Creates an SJF scheduler, optionally preemptive (SRTF).
    pub fn with_preemption(preemptive: bool) -> Self {
        let engine = if preemptive {
            RuleEngine::new().with_rule(rules::ShortestRemaining)
        } else {
            RuleEngine::new().with_rule(rules::ShortestBurst)
        };
        Self { preemptive, engine }
    }

    /// Whether decisions are revisited every time unit.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Default for ShortestJobFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingAlgorithm for ShortestJobFirst {
    fn name(&self) -> &'static str {
        if self.preemptive {
            "SRTF"
        } else {
            "SJF"
        }
    }

    fn title(&self) -> &'static str {
        "Shortest-job-first"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Report> {
        run_dispatch(self.name(), self.title(), processes, &self.engine, self.preemptive)
    }
}

/// Priority scheduler (lower value runs first).
///
/// Ties keep input order. Non-preemptive by default.
#[derive(Debug, Clone)]
pub struct PriorityScheduler {
    preemptive: bool,
    engine: RuleEngine,
}

impl PriorityScheduler {
    /// Creates a non-preemptive priority scheduler.
    pub fn new() -> Self {
        Self::with_preemption(false)
    }

    /// Creates a priority scheduler, optionally preemptive.
    pub fn with_preemption(preemptive: bool) -> Self {
        Self {
            preemptive,
            engine: RuleEngine::new().with_rule(rules::LowestPriorityValue),
        }
    }

    /// Whether decisions are revisited every time unit.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingAlgorithm for PriorityScheduler {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn title(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &[Process]) -> Result<Report> {
        run_dispatch(self.name(), self.title(), processes, &self.engine, self.preemptive)
    }
}

fn run_dispatch(
    name: &str,
    title: &str,
    processes: &[Process],
    engine: &RuleEngine,
    preemptive: bool,
) -> Result<Report> {
    check_batch(processes)?;
    debug!(
        algorithm = name,
        processes = processes.len(),
        preemptive,
        rule = engine.primary_rule_name(),
        "scheduling"
    );

    let mut state = RunState::new(processes);
    let mut timeline = Timeline::new();
    let mut clock = 0;

    while !state.all_complete() {
        let ready = state.ready(processes, clock);
        if ready.is_empty() {
            match state.next_arrival(processes, clock) {
                Some(next) => {
                    if !timeline.is_empty() {
                        warn!(idle_from = clock, idle_until = next, "cpu idle");
                    }
                    clock = next;
                    continue;
                }
                None => break,
            }
        }

        let candidates: Vec<Process> = ready.iter().map(|&i| processes[i].clone()).collect();
        let ctx = state.context(&candidates);
        let Some(best) = engine.select_best(&candidates, &ctx) else {
            break;
        };
        let p = &processes[ready[best]];

        let slice = if preemptive { 1 } else { state.remaining(p.id) };
        let stop = clock + slice;
        trace!(
            pid = p.id,
            start = clock,
            stop,
            scores = ?engine.evaluate(p, &ctx),
            "dispatch"
        );
        timeline.extend_or_append(p.id, clock, stop);
        state.run(p.id, slice, stop);
        clock = stop;
    }

    state.into_report(title, processes, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;
    use crate::scheduler::FirstComeFirstServe;

    #[test]
    fn test_sjf_same_arrival_shortest_first() {
        let batch = vec![
            Process::new(1, 0, 8),
            Process::new(2, 0, 4),
            Process::new(3, 0, 1),
            Process::new(4, 0, 6),
        ];
        let report = ShortestJobFirst::new().schedule(&batch).unwrap();
        assert_eq!(report.completion_order(), vec![3, 2, 4, 1]);
        assert_eq!(
            report.timeline.intervals(),
            &[
                ExecutionInterval::new(3, 0, 1),
                ExecutionInterval::new(2, 1, 5),
                ExecutionInterval::new(4, 5, 11),
                ExecutionInterval::new(1, 11, 19),
            ]
        );
        // waits: p1 11, p2 1, p3 0, p4 5 → 17 / 4
        assert!((report.aggregates.average_wait - 4.25).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_beats_fcfs_on_simultaneous_arrival() {
        let batch = vec![
            Process::new(1, 0, 9),
            Process::new(2, 0, 3),
            Process::new(3, 0, 5),
        ];
        let sjf = ShortestJobFirst::new().schedule(&batch).unwrap();
        let fcfs = FirstComeFirstServe.schedule(&batch).unwrap();
        assert!(sjf.aggregates.average_wait <= fcfs.aggregates.average_wait);
    }

    #[test]
    fn test_sjf_equal_bursts_degrade_to_arrival_order() {
        let batch = vec![
            Process::new(5, 0, 3),
            Process::new(2, 1, 3),
            Process::new(8, 2, 3),
        ];
        let report = ShortestJobFirst::new().schedule(&batch).unwrap();
        assert_eq!(report.completion_order(), vec![5, 2, 8]);
    }

    #[test]
    fn test_sjf_non_preemptive_respects_arrivals() {
        // P1 is alone at t=0 and runs to completion even though P2 is shorter.
        let batch = vec![Process::new(1, 0, 7), Process::new(2, 1, 2)];
        let report = ShortestJobFirst::new().schedule(&batch).unwrap();
        assert_eq!(report.completion_order(), vec![1, 2]);
        assert_eq!(report.row_for(2).unwrap().wait_time, 6);
    }

    #[test]
    fn test_srtf_preempts_for_shorter_remaining() {
        let batch = vec![Process::new(1, 0, 7), Process::new(2, 1, 2)];
        let report = ShortestJobFirst::with_preemption(true)
            .schedule(&batch)
            .unwrap();
        assert_eq!(
            report.timeline.intervals(),
            &[
                ExecutionInterval::new(1, 0, 1),
                ExecutionInterval::new(2, 1, 3),
                ExecutionInterval::new(1, 3, 9),
            ]
        );
        assert_eq!(report.row_for(2).unwrap().wait_time, 0);
        assert_eq!(report.row_for(1).unwrap().wait_time, 2);
    }

    #[test]
    fn test_priority_lower_value_first() {
        let batch = vec![
            Process::new(1, 0, 4).with_priority(5),
            Process::new(2, 0, 4).with_priority(1),
        ];
        let report = PriorityScheduler::new().schedule(&batch).unwrap();
        assert_eq!(report.completion_order(), vec![2, 1]);
        assert_eq!(report.row_for(1).unwrap().wait_time, 4);
    }

    #[test]
    fn test_priority_ties_keep_input_order() {
        let batch = vec![
            Process::new(3, 0, 2).with_priority(2),
            Process::new(1, 0, 2).with_priority(2),
            Process::new(2, 0, 2).with_priority(0),
        ];
        let report = PriorityScheduler::new().schedule(&batch).unwrap();
        assert_eq!(report.completion_order(), vec![2, 3, 1]);
    }

    #[test]
    fn test_priority_default_zero_is_arrival_order() {
        let batch = vec![
            Process::new(1, 0, 5),
            Process::new(2, 2, 3),
            Process::new(3, 4, 2),
        ];
        let priority = PriorityScheduler::new().schedule(&batch).unwrap();
        let fcfs = FirstComeFirstServe.schedule(&batch).unwrap();
        assert_eq!(priority.rows, fcfs.rows);
    }

    #[test]
    fn test_preemptive_priority() {
        let batch = vec![
            Process::new(1, 0, 5).with_priority(3),
            Process::new(2, 2, 2).with_priority(1),
        ];
        let report = PriorityScheduler::with_preemption(true)
            .schedule(&batch)
            .unwrap();
        assert_eq!(report.timeline.len(), 3);
        assert_eq!(report.row_for(2).unwrap().completion_time, 4);
        assert_eq!(report.row_for(1).unwrap().completion_time, 7);
    }

    #[test]
    fn test_idle_gap_jumps_clock() {
        let batch = vec![Process::new(1, 3, 2), Process::new(2, 10, 1)];
        let report = ShortestJobFirst::new().schedule(&batch).unwrap();
        assert_eq!(
            report.timeline.intervals(),
            &[
                ExecutionInterval::new(1, 3, 5),
                ExecutionInterval::new(2, 10, 11),
            ]
        );
        assert_eq!(report.wait_times(), vec![0, 0]);
    }

    #[test]
    fn test_input_batch_untouched() {
        let batch = vec![Process::new(1, 0, 9), Process::new(2, 0, 1)];
        let before = batch.clone();
        ShortestJobFirst::new().schedule(&batch).unwrap();
        PriorityScheduler::new().schedule(&batch).unwrap();
        assert_eq!(batch, before);
    }

    #[test]
    fn test_names() {
        assert_eq!(ShortestJobFirst::new().name(), "SJF");
        assert_eq!(ShortestJobFirst::with_preemption(true).name(), "SRTF");
        assert!(PriorityScheduler::with_preemption(true).is_preemptive());
    }
}
