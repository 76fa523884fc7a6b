//! Input validation for process batches.
//!
//! Checks structural integrity of a batch before any algorithm runs.
//! Detects:
//! - Empty batches (throughput would be undefined)
//! - Duplicate process IDs (per-run state is keyed by ID)
//! - Non-positive burst durations
//! - Negative arrival times
//! - Batches whose latest possible completion does not fit in `i64`

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::Process;

/// Validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch contains no processes.
    EmptyBatch,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    HorizonOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst duration is positive
/// 4. Every arrival time is non-negative
/// 5. The horizon, latest arrival plus total burst, fits in `i64`
///
/// Every algorithm keeps the CPU busy whenever work is ready, so no clock
/// value or completion time exceeds the horizon.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "Process batch is empty",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has burst {}", p.id, p.burst_duration),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at {}", p.id, p.arrival_time),
            ));
        }
    }

    if errors.is_empty() && horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst overflows a 64-bit clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every clock value of a run, or `None` on overflow.
fn horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max()?;
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_duration))
}

/// Validates a batch and converts failures into the crate error.
///
/// An empty batch maps to [`Error::EmptyBatch`]; every other issue is
/// reported through [`Error::InvalidBatch`].
pub fn check_batch(processes: &[Process]) -> Result<()> {
    validate_batch(processes).map_err(|errors| {
        if errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyBatch)
        {
            Error::EmptyBatch
        } else {
            Error::InvalidBatch(errors)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 2, 3).with_priority(1),
            Process::new(3, 4, 2),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_batch(&sample_batch()).is_ok());
        assert!(check_batch(&sample_batch()).is_ok());
    }

    #[test]
    fn test_empty_batch() {
        let errors = validate_batch(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyBatch);
        assert!(matches!(check_batch(&[]), Err(Error::EmptyBatch)));
    }

    #[test]
    fn test_duplicate_id() {
        let batch = vec![Process::new(1, 0, 5), Process::new(1, 1, 2)];
        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_non_positive_burst() {
        let batch = vec![Process::new(1, 0, 0), Process::new(2, 0, -3)];
        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_arrival() {
        let batch = vec![Process::new(1, -1, 4)];
        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_multiple_errors() {
        let batch = vec![Process::new(1, -2, 0), Process::new(1, 0, 1)];
        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors.len() >= 3);

        match check_batch(&batch) {
            Err(Error::InvalidBatch(found)) => assert_eq!(found, errors),
            other => panic!("expected InvalidBatch, got {other:?}"),
        }
    }

    #[test]
    fn test_horizon_overflow() {
        let half = i64::MAX / 2 + 1;
        let batch = vec![Process::new(1, 0, half), Process::new(2, 0, half)];
        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);

        let late = vec![Process::new(1, i64::MAX - 1, 5)];
        assert!(matches!(check_batch(&late), Err(Error::InvalidBatch(_))));
    }

    #[test]
    fn test_horizon_at_limit() {
        let batch = vec![Process::new(1, i64::MAX - 5, 5)];
        assert!(validate_batch(&batch).is_ok());
    }
}
