//! Scheduling domain models.
//!
//! Core data types for the weekly revenue scheduler: candidate projects,
//! slot assignments, complete week schedules, and the derived monthly
//! revenue summaries.
//!
//! # Lifecycle
//!
//! | Type | Created by | Mutability |
//! |------|-----------|------------|
//! | `Project` | repository `add` | read-only after creation |
//! | `ScheduledAssignment` | scheduler, or rebuilt from storage | value |
//! | `WeekSchedule` | one scheduling run | replaced wholesale on save |
//! | `MonthlySummary` | analytics, on demand | derived, never persisted |

mod assignment;
mod project;
mod summary;

pub use assignment::{slot_name, ScheduledAssignment, WeekSchedule};
pub use project::{Project, ProjectDraft};
pub use summary::MonthlySummary;
