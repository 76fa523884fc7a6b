//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules lexicographically: the next rule is consulted
//! only when every earlier rule ties. Sorting is stable, so processes that
//! tie on every rule keep their existing relative order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// A composable rule engine for process ordering.
///
/// # Example
/// ```
/// use cpu_schedsim::dispatching::{RuleEngine, SchedulingContext};
/// use cpu_schedsim::dispatching::rules;
/// use cpu_schedsim::models::Process;
///
/// let batch = vec![
///     Process::new(1, 0, 4).with_priority(3),
///     Process::new(2, 0, 9).with_priority(1),
///     Process::new(3, 0, 2).with_priority(1),
/// ];
/// let engine = RuleEngine::new()
///     .with_rule(rules::LowestPriorityValue)
///     .with_rule(rules::ShortestBurst);
///
/// let best = engine.select_best(&batch, &SchedulingContext::new());
/// assert_eq!(best, Some(2));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every process ties, so the order is left untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Name of the primary rule, if any.
    pub fn primary_rule_name(&self) -> Option<&'static str> {
        self.rules.first().map(|r| r.name())
    }

    /// Compares two processes under the rule chain.
    pub fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule
                .evaluate(a, context)
                .cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Returns indices into `processes`, best first.
    ///
    /// The sort is stable: ties keep their position in `processes`.
    pub fn sort_indices(&self, processes: &[Process], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the index of the best process.
    pub fn select_best(&self, processes: &[Process], context: &SchedulingContext) -> Option<usize> {
        self.sort_indices(processes, context).first().copied()
    }

    /// Scores a single process under every rule.
    pub fn evaluate(&self, process: &Process, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(process, context))
            .collect()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
