//! Boundary validation for problem instances.
//!
//! The search core assumes a structurally sound [`ProblemModel`] and does
//! not re-validate it (a malformed model gives meaningless, though
//! non-crashing, search results). Callers building models from untrusted
//! data run [`validate_model`] first; [`parse_instance`](super::parse_instance)
//! does this automatically.
//!
//! [`ProblemModel`]: super::ProblemModel

use super::task::{Task, Time};

/// Validation result: all detected issues, not just the first.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A structural problem in an instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of instance validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A task finishes before it starts.
    NegativeTaskDuration,
    /// The rotation time limit is negative.
    NegativeTimeLimit,
    /// A transition references a task index outside the task list.
    InvalidTaskReference,
    /// A transition cost is negative, NaN, or infinite.
    InvalidTransitionCost,
    /// The same ordered task pair is listed twice.
    DuplicateTransition,
    /// A transition leads to a task with an earlier finish time.
    ///
    /// Rotation enumeration prunes a branch once the duration limit is
    /// exceeded, which is sound only if finish times are non-decreasing
    /// along every chain.
    NonMonotonicTransition,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the raw parts of a problem instance.
///
/// Checks:
/// 1. Every task has `finish >= start`
/// 2. The time limit is non-negative
/// 3. Transition endpoints are valid task indices
/// 4. Transition costs are finite and non-negative
/// 5. No ordered task pair is listed twice
/// 6. Every transition `(i, j)` has `finish(j) >= finish(i)`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_model(
    tasks: &[Task],
    transitions: &[(usize, usize, f64)],
    time_limit: Time,
) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, task) in tasks.iter().enumerate() {
        if task.finish < task.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTaskDuration,
                format!(
                    "task {i} finishes at {} before its start {}",
                    task.finish, task.start
                ),
            ));
        }
    }

    if time_limit < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeTimeLimit,
            format!("time limit {time_limit} is negative"),
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for &(from, to, cost) in transitions {
        if from >= tasks.len() || to >= tasks.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTaskReference,
                format!("transition ({from}, {to}) references a missing task"),
            ));
            continue;
        }
        if !cost.is_finite() || cost < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTransitionCost,
                format!("transition ({from}, {to}) has cost {cost}"),
            ));
        }
        if !seen.insert((from, to)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTransition,
                format!("transition ({from}, {to}) is listed twice"),
            ));
        }
        if tasks[to].finish < tasks[from].finish {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonMonotonicTransition,
                format!(
                    "transition ({from}, {to}) decreases the finish time ({} -> {})",
                    tasks[from].finish, tasks[to].finish
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
