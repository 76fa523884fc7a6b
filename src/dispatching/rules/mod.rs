//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Time-based**: SJF (shortest burst), SRTF (shortest remaining)
//! - **Priority**: PRIORITY (lowest value first)
//!
//! # Score Convention
//! All rules return lower scores for processes to run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

// ======================== Time-based rules ========================

/// Shortest burst duration first.
///
/// Scores by the original burst, independent of progress. Optimal for
/// minimizing mean wait when every process arrives at once.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_duration
    }
}

/// Shortest remaining time first.
///
/// Uses `context.remaining_work` if available, falls back to the burst.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore {
        context
            .remaining(process.id)
            .unwrap_or(process.burst_duration)
    }
}

// ======================== Priority rule ========================

/// Lowest priority value first (priority 0 outranks priority 5).
#[derive(Debug, Clone, Copy)]
pub struct LowestPriorityValue;

impl DispatchingRule for LowestPriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.priority
    }
}
