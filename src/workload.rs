//! Seeded synthetic process batches.
//!
//! Useful for comparing the algorithms on larger inputs than a
//! hand-written CSV. The same seed always yields the same batch.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Process;

/// Parameters of a synthetic batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Smallest burst (at least 1).
    pub min_burst: i64,
    /// Largest burst.
    pub max_burst: i64,
    /// Priorities are drawn from `0..=max_priority`.
    pub max_priority: i64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 10,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
        }
    }
}

impl WorkloadConfig {
    /// Default parameters for `count` processes.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the latest arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidWorkload("count must be positive".into()));
        }
        if self.min_burst < 1 || self.min_burst > self.max_burst {
            return Err(Error::InvalidWorkload(format!(
                "burst range {}..={} must be non-empty and start at 1 or more",
                self.min_burst, self.max_burst
            )));
        }
        if self.max_arrival < 0 || self.max_priority < 0 {
            return Err(Error::InvalidWorkload(
                "max_arrival and max_priority must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

/// Generates a batch sorted by arrival, with IDs `1..=count`.
///
/// # Example
///
/// ```
/// use cpu_schedsim::workload::{generate, WorkloadConfig};
///
/// let a = generate(&WorkloadConfig::with_count(5), 42).unwrap();
/// let b = generate(&WorkloadConfig::with_count(5), 42).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate(config: &WorkloadConfig, seed: u64) -> Result<Vec<Process>> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut batch: Vec<Process> = (1..=config.count as i64)
        .map(|id| {
            let arrival = rng.random_range(0..=config.max_arrival);
            let burst = rng.random_range(config.min_burst..=config.max_burst);
            let priority = rng.random_range(0..=config.max_priority);
            Process::new(id, arrival, burst).with_priority(priority)
        })
        .collect();
    batch.sort_by_key(|p| p.arrival_time);

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_batch;

    #[test]
    fn test_deterministic_per_seed() {
        let config = WorkloadConfig::with_count(20);
        assert_eq!(generate(&config, 7).unwrap(), generate(&config, 7).unwrap());
    }

    #[test]
    fn test_ranges_respected() {
        let config = WorkloadConfig::with_count(50)
            .with_burst_range(2, 4)
            .with_max_arrival(9)
            .with_max_priority(3);
        let batch = generate(&config, 1).unwrap();

        assert_eq!(batch.len(), 50);
        for p in &batch {
            assert!((0..=9).contains(&p.arrival_time));
            assert!((2..=4).contains(&p.burst_duration));
            assert!((0..=3).contains(&p.priority));
        }
        assert!(validate_batch(&batch).is_ok());
    }

    #[test]
    fn test_sorted_by_arrival() {
        let batch = generate(&WorkloadConfig::with_count(30), 3).unwrap();
        assert!(batch
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(generate(&WorkloadConfig::with_count(0), 0).is_err());
        assert!(generate(&WorkloadConfig::with_count(3).with_burst_range(0, 4), 0).is_err());
        assert!(generate(&WorkloadConfig::with_count(3).with_burst_range(5, 4), 0).is_err());
        assert!(matches!(
            generate(&WorkloadConfig::with_count(3).with_max_arrival(-1), 0),
            Err(Error::InvalidWorkload(_))
        ));
    }
}
