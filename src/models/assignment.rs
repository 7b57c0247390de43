//! Schedule (solution) model.
//!
//! A week schedule is a complete assignment of projects to the discrete
//! slots of a working week. Produced by the scheduler or reconstructed
//! from persisted rows; keyed by a week label when stored.
//!
//! # Invariant
//! A slot index appears at most once within one schedule.

use serde::{Deserialize, Serialize};

/// Display names for the default five-slot week, indexed by slot (1-based).
const SLOT_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Returns the display name for a slot index.
///
/// Slots 1-5 map to weekday names; anything beyond falls back to "Day N".
pub fn slot_name(slot: u32) -> String {
    match slot {
        1..=5 => SLOT_NAMES[(slot - 1) as usize].to_string(),
        n => format!("Day {n}"),
    }
}

/// A project-slot assignment.
///
/// Records that a specific project occupies a specific slot of the week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledAssignment {
    /// The assigned project.
    pub project: super::Project,
    /// Assigned slot index (1-based).
    pub slot: u32,
    /// Slot display name ("Monday".."Friday").
    pub slot_name: String,
}

impl ScheduledAssignment {
    /// Creates an assignment, deriving the slot display name.
    pub fn new(project: super::Project, slot: u32) -> Self {
        let slot_name = slot_name(slot);
        Self {
            project,
            slot,
            slot_name,
        }
    }

    /// Revenue captured by this assignment.
    #[inline]
    pub fn revenue(&self) -> f64 {
        self.project.revenue
    }
}

/// A complete weekly schedule: assignments in ascending slot order,
/// keyed by the week label it was (or will be) persisted under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// Week label ("Week-2024-05").
    pub label: String,
    /// Assignments in ascending slot order.
    pub assignments: Vec<ScheduledAssignment>,
}

impl WeekSchedule {
    /// Creates an empty schedule for the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            assignments: Vec::new(),
        }
    }

    /// Creates a schedule from already-ordered assignments.
    pub fn with_assignments(mut self, assignments: Vec<ScheduledAssignment>) -> Self {
        self.assignments = assignments;
        self
    }

    /// Total revenue captured across all assignments.
    pub fn total_revenue(&self) -> f64 {
        self.assignments.iter().map(|a| a.revenue()).sum()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Finds the assignment occupying a given slot.
    pub fn assignment_for_slot(&self, slot: u32) -> Option<&ScheduledAssignment> {
        self.assignments.iter().find(|a| a.slot == slot)
    }

    /// Whether the schedule holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
