//! Input validation for simulation runs.
//!
//! Checks the process list and run parameters before any policy runs.
//! The policies assume these hold and only `debug_assert!` them. Detects:
//! - Empty process lists
//! - Duplicate process names
//! - Non-positive bursts and negative arrivals
//! - Non-positive horizons
//! - Missing or non-positive Round-Robin quanta

use std::collections::HashSet;

use crate::config::SimulationConfig;
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
    /// No processes to simulate.
    EmptyProcessList,
    /// Two processes share the same name.
    DuplicateName,
    /// A burst time is zero or negative.
    InvalidBurst,
    /// An arrival time is negative.
    InvalidArrival,
    /// The horizon is zero or negative.
    InvalidRunFor,
    /// Round-Robin was requested without a quantum.
    MissingQuantum,
    /// The quantum is zero or negative.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the processes and parameters of a run.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process names
/// 3. Every burst time is positive
/// 4. Every arrival time is non-negative
/// 5. `run_for` is positive
/// 6. Round-Robin has a quantum, and any quantum given is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "No processes to schedule",
        ));
    }

    let mut names = HashSet::new();
    for p in processes {
        if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process '{}' has non-positive burst {}", p.name, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!(
                    "Process '{}' has negative arrival {}",
                    p.name, p.arrival_time
                ),
            ));
        }
    }

    if config.run_for <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRunFor,
            format!("runfor must be positive, got {}", config.run_for),
        ));
    }

    match config.quantum {
        None if config.algorithm.requires_quantum() => {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingQuantum,
                format!("Missing 'quantum' parameter when use is '{}'", config.algorithm),
            ));
        }
        Some(q) if q <= 0 => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("quantum must be positive, got {q}"),
            ));
        }
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
