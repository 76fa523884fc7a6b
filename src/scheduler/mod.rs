//! Scheduling algorithms and the batch driver.
//!
//! Four classic CPU-scheduling disciplines, each simulated over the same
//! process batch:
//!
//! | Algorithm | Order | Preemption |
//! |-----------|-------|-----------|
//! | FCFS | input order | none |
//! | SJF | shortest burst among arrived | optional (SRTF) |
//! | Priority | lowest priority value among arrived | optional |
//! | Round-robin | cyclic sweep in input order | every quantum |
//!
//! Every run works on its own bookkeeping keyed by process ID; the input
//! slice is only ever borrowed immutably.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

mod config;
mod dispatch;
mod fcfs;
mod metrics;
mod round_robin;
mod state;

pub use config::{SimulationConfig, DEFAULT_QUANTUM};
pub use dispatch::{PriorityScheduler, ShortestJobFirst};
pub use fcfs::FirstComeFirstServe;
pub use metrics::{finalize, MetricsAggregator};
pub use round_robin::RoundRobin;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Process, Report};

/// A CPU-scheduling discipline simulated over a finite batch.
pub trait SchedulingAlgorithm: fmt::Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Report title.
    fn title(&self) -> &'static str;

    /// Simulates the batch to completion.
    ///
    /// # Errors
    /// [`crate::Error::EmptyBatch`] or [`crate::Error::InvalidBatch`] when the
    /// batch fails validation.
    fn schedule(&self, processes: &[Process]) -> Result<Report>;
}

/// Selector for the built-in algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come, first-serve.
    Fcfs,
    /// Shortest-job-first.
    Sjf,
    /// Priority scheduling.
    Priority,
    /// Round-robin.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms, in reporting order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Instantiates the algorithm for a configuration.
    pub fn build(self, config: &SimulationConfig) -> Result<Box<dyn SchedulingAlgorithm>> {
        Ok(match self {
            Algorithm::Fcfs => Box::new(FirstComeFirstServe),
            Algorithm::Sjf => Box::new(ShortestJobFirst::with_preemption(config.preemptive)),
            Algorithm::Priority => Box::new(PriorityScheduler::with_preemption(config.preemptive)),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(config.quantum)?),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Priority => "priority",
            Algorithm::RoundRobin => "round_robin",
        };
        f.write_str(name)
    }
}

/// Runs one algorithm over a batch.
pub fn simulate(
    algorithm: Algorithm,
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<Report> {
    config.validate()?;
    algorithm.build(config)?.schedule(processes)
}

/// Runs the given algorithms in order over the same batch.
pub fn simulate_each(
    algorithms: &[Algorithm],
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<Vec<Report>> {
    algorithms
        .iter()
        .map(|&a| simulate(a, processes, config))
        .collect()
}

/// Runs FCFS, SJF, priority and round-robin over the same batch.
///
/// # Example
///
/// ```
/// use cpu_schedsim::models::Process;
/// use cpu_schedsim::scheduler::{simulate_all, SimulationConfig};
///
/// let batch = vec![Process::new(1, 0, 5), Process::new(2, 2, 3)];
/// let reports = simulate_all(&batch, &SimulationConfig::default()).unwrap();
/// let titles: Vec<_> = reports.iter().map(|r| r.title.as_str()).collect();
/// assert_eq!(
///     titles,
///     ["First-come, first-serve", "Shortest-job-first", "Priority", "Round-robin"]
/// );
/// ```
pub fn simulate_all(processes: &[Process], config: &SimulationConfig) -> Result<Vec<Report>> {
    simulate_each(&Algorithm::ALL, processes, config)
}
