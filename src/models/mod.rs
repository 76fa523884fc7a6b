//! Simulation domain models.
//!
//! Provides the input record (`Process`) and the output of a run:
//! the Gantt `Timeline`, per-process `ProcessOutcome` rows and
//! `RunAggregates`, bundled as a `Report`.
//!
//! # Domain Mappings
//!
//! | cpu-schedsim | OS textbook | Batch system |
//! |--------------|-------------|--------------|
//! | Process | PCB | Job |
//! | ExecutionInterval | Gantt bar | Run slot |
//! | ProcessOutcome | Result row | Job accounting |
//! | Report | Scheduling exercise | Shift report |

mod process;
mod report;
mod timeline;

pub use process::{Process, ProcessId};
pub use report::{ProcessOutcome, Report, RunAggregates};
pub use timeline::{ExecutionInterval, Timeline};
