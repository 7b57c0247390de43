//! Project model.
//!
//! A project is a unit-length, revenue-bearing job competing for one of
//! the slots in a working week. Its deadline is expressed in slots:
//! "must be scheduled on or before slot N".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A revenue-bearing project to be sequenced into the week.
///
/// Immutable once persisted; the repository assigns `code` and
/// `created_at` at creation time. The scheduler assumes `deadline`
/// and `revenue` have already passed validation (see [`crate::validation`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique sequential code ("PRJ001", "PRJ002", ...).
    pub code: String,
    /// Human-readable title.
    pub title: String,
    /// Latest admissible slot, 1-based ("on or before slot N").
    pub deadline: u32,
    /// Expected revenue. Positive.
    pub revenue: f64,
    /// Persistence timestamp. `None` until the project is stored.
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Creates a new project with the given code.
    pub fn new(code: impl Into<String>, title: impl Into<String>, deadline: u32, revenue: f64) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            deadline,
            revenue,
            created_at: None,
        }
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Input for creating a project, before the repository assigns identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDraft {
    /// Human-readable title.
    pub title: String,
    /// Latest admissible slot, 1-based.
    pub deadline: u32,
    /// Expected revenue. Positive.
    pub revenue: f64,
}

impl ProjectDraft {
    /// Creates a new draft.
    pub fn new(title: impl Into<String>, deadline: u32, revenue: f64) -> Self {
        Self {
            title: title.into(),
            deadline,
            revenue,
        }
    }
}
