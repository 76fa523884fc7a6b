//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default round-robin time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Knobs shared by every algorithm run.
///
/// Missing JSON fields fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-robin time slice.
    pub quantum: i64,
    /// Re-evaluate SJF/priority decisions every time unit.
    pub preemptive: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            preemptive: false,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Enables or disables preemption for SJF and priority scheduling.
    pub fn with_preemptive(mut self, preemptive: bool) -> Self {
        self.preemptive = preemptive;
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.quantum <= 0 {
            return Err(Error::InvalidQuantum(self.quantum));
        }
        Ok(())
    }
}
