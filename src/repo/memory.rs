//! In-memory repository implementations.
//!
//! Reference implementations of the storage contracts, used by the
//! analytics layer in tests and by embedders that do not need durable
//! storage. A database-backed implementation plugs in behind the same
//! traits.

use std::collections::BTreeMap;

use chrono::Utc;
use log::debug;

use super::{ProjectRepository, RepoError, RepoResult, ScheduleRepository};
use crate::models::{Project, ProjectDraft, ScheduledAssignment};

const CODE_PREFIX: &str = "PRJ";

/// Vec-backed project store with sequential code assignment.
#[derive(Debug, Default)]
pub struct MemoryProjectRepository {
    projects: Vec<Project>,
}

impl MemoryProjectRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next code in the "PRJ001" sequence, derived from the last issued
    /// code. Single-writer: a concurrent-writer deployment needs an
    /// atomically reserved sequence instead of read-then-increment.
    fn next_code(&self) -> RepoResult<String> {
        let Some(last) = self.projects.last() else {
            return Ok(format!("{CODE_PREFIX}001"));
        };
        let number: u32 = last
            .code
            .strip_prefix(CODE_PREFIX)
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| {
                RepoError::InvalidData(format!("unparseable project code on record: {}", last.code))
            })?;
        Ok(format!("{CODE_PREFIX}{:03}", number + 1))
    }
}

impl ProjectRepository for MemoryProjectRepository {
    fn add(&mut self, draft: ProjectDraft) -> RepoResult<Project> {
        if draft.title.trim().is_empty() {
            return Err(RepoError::InvalidData("title must not be empty".into()));
        }

        let code = self.next_code()?;
        let project =
            Project::new(code, draft.title, draft.deadline, draft.revenue).with_created_at(Utc::now());
        debug!("stored project {} ({})", project.code, project.title);
        self.projects.push(project.clone());
        Ok(project)
    }

    fn list_all(&self) -> RepoResult<Vec<Project>> {
        Ok(self.projects.clone())
    }
}

/// Map-backed schedule store with replace-by-label semantics.
///
/// `BTreeMap` keeps `list_labels` in ascending label order, matching the
/// ordering a database index would give.
#[derive(Debug, Default)]
pub struct MemoryScheduleRepository {
    schedules: BTreeMap<String, Vec<ScheduledAssignment>>,
}

impl MemoryScheduleRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleRepository for MemoryScheduleRepository {
    fn save(&mut self, label: &str, assignments: &[ScheduledAssignment]) -> RepoResult<()> {
        // Single insert, so the replace is atomic by construction.
        self.schedules.insert(label.to_string(), assignments.to_vec());
        debug!("saved {} assignment(s) under {label}", assignments.len());
        Ok(())
    }

    fn list_labels(&self) -> RepoResult<Vec<String>> {
        Ok(self.schedules.keys().cloned().collect())
    }

    fn get_by_label(&self, label: &str) -> RepoResult<Vec<ScheduledAssignment>> {
        Ok(self.schedules.get(label).cloned().unwrap_or_default())
    }
}
