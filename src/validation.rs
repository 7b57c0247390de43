//! Input validation for the scheduler's candidate pool.
//!
//! Checks structural integrity of projects before scheduling. The
//! scheduler itself assumes validated input; this is the boundary where
//! data-entry mistakes are caught. Detects:
//! - Duplicate project codes
//! - Empty titles
//! - Deadlines outside the slot grid
//! - Non-positive revenue

use std::collections::HashSet;

use crate::models::Project;

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
    /// Two projects share the same code.
    DuplicateCode,
    /// A project has an empty title.
    EmptyTitle,
    /// Deadline is zero or beyond the slot grid.
    DeadlineOutOfRange,
    /// Revenue is zero or negative (or not a number).
    NonPositiveRevenue,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a candidate pool against a slot grid of `slot_count` slots.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_projects(projects: &[Project], slot_count: u32) -> ValidationResult {
    let mut errors = Vec::new();
    let mut codes = HashSet::new();

    for project in projects {
        if !codes.insert(project.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate project code: {}", project.code),
            ));
        }

        if project.title.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTitle,
                format!("Project '{}' has an empty title", project.code),
            ));
        }

        if project.deadline < 1 || project.deadline > slot_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::DeadlineOutOfRange,
                format!(
                    "Project '{}' deadline {} outside 1..={slot_count}",
                    project.code, project.deadline
                ),
            ));
        }

        if !(project.revenue > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveRevenue,
                format!(
                    "Project '{}' revenue {} must be positive",
                    project.code, project.revenue
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
