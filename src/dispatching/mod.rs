//! Dispatching rules (ordering policies) and the rule engine.
//!
//! A dispatching rule scores a process; the rule engine turns scores into
//! a stable total order over a batch. Equal scores keep the existing
//! relative order of the batch, so runs are reproducible.
//!
//! # Usage
//!
//! ```
//! use cpu_schedsim::dispatching::{RuleEngine, SchedulingContext};
//! use cpu_schedsim::dispatching::rules;
//! use cpu_schedsim::models::Process;
//!
//! let batch = vec![Process::new(1, 0, 7), Process::new(2, 0, 3)];
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//!
//! let order = engine.sort_indices(&batch, &SchedulingContext::new());
//! assert_eq!(order, vec![1, 0]);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = scheduled first.
pub type RuleScore = i64;

/// A dispatching rule that scores a process.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should be scheduled first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores a process given the current simulation state.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;
}
