//! Input validation for simulation batches.
//!
//! Checks the integrity of a process batch before simulation. Detects:
//! - Empty batches (averages over zero elements are undefined)
//! - Non-positive burst times
//! - Negative arrival times
//!
//! Duplicate process ids are deliberately not checked: identity
//! semantics belong to the caller, and a batch with duplicate ids
//! simulates to a result that reflects whatever ids were given.

use std::error::Error;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch contains no processes.
    EmptyBatch,
    /// A process has a burst time of zero or less.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ValidationError {}

/// Validates a process batch for simulation.
///
/// Checks:
/// 1. The batch is non-empty
/// 2. Every burst time is positive
/// 3. Every arrival time is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "Batch contains no processes",
        ));
    }

    for process in processes {
        if process.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    process.id, process.burst_time
                ),
            ));
        }
        if process.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    process.id, process.arrival_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_batch() {
        let batch = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 3)];
        assert!(validate_input(&batch).is_ok());
    }

    #[test]
    fn test_empty_batch() {
        let errors = validate_input(&[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyBatch));
    }

    #[test]
    fn test_zero_burst() {
        let batch = vec![Process::new("P1", 0, 0)];
        let errors = validate_input(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_burst() {
        let batch = vec![Process::new("P1", 0, -5)];
        let errors = validate_input(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst && e.message.contains("P1")));
    }

    #[test]
    fn test_negative_arrival() {
        let batch = vec![Process::new("P1", -1, 4)];
        let errors = validate_input(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_duplicate_ids_allowed() {
        // Identity is the caller's concern
        let batch = vec![Process::new("P1", 0, 2), Process::new("P1", 1, 3)];
        assert!(validate_input(&batch).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        // One bad burst + one bad arrival → both reported
        let batch = vec![Process::new("P1", 0, 0), Process::new("P2", -3, 4)];
        let errors = validate_input(&batch).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_error_display() {
        let errors = validate_input(&[]).unwrap_err();
        assert_eq!(errors[0].to_string(), "Batch contains no processes");
    }
}
