//! Repository contracts and in-memory implementations.
//!
//! The scheduler and analytics layers consume storage through these
//! traits; the backing store is a collaborator detail. Handles are
//! constructed explicitly and passed in — no process-wide connection
//! state.
//!
//! # Contracts
//! - `ProjectRepository::add` assigns the next sequential project code
//!   and stamps the creation time.
//! - `ScheduleRepository::save` is a transactional replace-by-label:
//!   after it returns, old and new assignments for that label never
//!   coexist, and on failure the previous set stays intact.

mod memory;

pub use memory::{MemoryProjectRepository, MemoryScheduleRepository};

use thiserror::Error;

use crate::models::{Project, ProjectDraft, ScheduledAssignment};

/// Result alias for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Error for repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    /// Rejected input (empty title, bad code on record, ...).
    #[error("invalid project data: {0}")]
    InvalidData(String),
    /// Backing store failure.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Storage contract for projects.
pub trait ProjectRepository {
    /// Persists a draft, assigning its sequential code and timestamp.
    fn add(&mut self, draft: ProjectDraft) -> RepoResult<Project>;

    /// Lists all persisted projects. Order unspecified.
    fn list_all(&self) -> RepoResult<Vec<Project>>;
}

/// Storage contract for weekly schedules.
pub trait ScheduleRepository {
    /// Replaces the schedule stored under `label` with `assignments`.
    ///
    /// All-or-nothing: on error the previously stored set is untouched.
    fn save(&mut self, label: &str, assignments: &[ScheduledAssignment]) -> RepoResult<()>;

    /// All labels with a stored schedule, in ascending label order.
    fn list_labels(&self) -> RepoResult<Vec<String>>;

    /// Assignments stored under `label`; empty if the label is unknown.
    fn get_by_label(&self, label: &str) -> RepoResult<Vec<ScheduledAssignment>>;
}
