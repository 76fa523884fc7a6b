//! Offline CPU-scheduling simulator.
//!
//! Simulates four classic scheduling disciplines over a fixed batch of
//! processes and reports, per discipline, the Gantt timeline, per-process
//! wait/turnaround/completion and aggregate statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionInterval`, `Timeline`,
//!   `ProcessOutcome`, `RunAggregates`, `Report`
//! - **`dispatching`**: Ordering policies (`ShortestBurst`, `LowestPriorityValue`, ...)
//!   and the stable `RuleEngine`
//! - **`scheduler`**: FCFS, SJF, priority and round-robin simulations,
//!   metrics aggregation, `SimulationConfig`
//! - **`validation`**: Batch integrity checks (empty batch, duplicate IDs, ranges)
//! - **`input`**: CSV batch loading
//! - **`render`**: Plain-text report rendering
//! - **`workload`**: Seeded synthetic batches
//!
//! # Example
//!
//! ```
//! use cpu_schedsim::models::Process;
//! use cpu_schedsim::scheduler::{simulate_all, SimulationConfig};
//!
//! let batch = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 2, 3),
//!     Process::new(3, 4, 2),
//! ];
//! let reports = simulate_all(&batch, &SimulationConfig::default()).unwrap();
//! assert_eq!(reports.len(), 4);
//! assert_eq!(reports[0].wait_times(), vec![0, 3, 4]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
