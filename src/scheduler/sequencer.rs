//! Greedy deadline-constrained job sequencer.
//!
//! # Algorithm
//!
//! 1. Sort projects by revenue descending (stable: equal-revenue projects
//!    keep their input order).
//! 2. Maintain `slot_count` free slots, indexed 1..=slot_count.
//! 3. For each project, scan from `min(slot_count, deadline)` down to 1
//!    and take the first free slot; if none is free the project is
//!    dropped (a capacity miss, not an error).
//! 4. Emit filled slots in ascending slot order.
//!
//! Occupying the latest feasible slot keeps earlier slots free for
//! projects with tighter deadlines. This is the classical single-machine
//! weighted job-sequencing greedy and is revenue-optimal for unit-length
//! jobs on a common slot grid.
//!
//! # Complexity
//! O(n log n + n * s) where n = projects, s = slot count.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4;
//! the job-sequencing-with-deadlines greedy of Horowitz & Sahni.

use log::debug;

use crate::models::{Project, ScheduledAssignment};

/// Default number of slots: a five-day working week.
pub const DEFAULT_SLOT_COUNT: u32 = 5;

/// Greedy revenue-maximizing slot scheduler.
///
/// Pure computation: no I/O, no state beyond configuration.
///
/// # Example
///
/// ```
/// use promanage_core::models::Project;
/// use promanage_core::scheduler::SlotScheduler;
///
/// let projects = vec![
///     Project::new("PRJ001", "A", 2, 100.0),
///     Project::new("PRJ002", "B", 1, 80.0),
///     Project::new("PRJ003", "C", 2, 60.0),
/// ];
///
/// let schedule = SlotScheduler::new().schedule(&projects);
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(schedule[0].project.code, "PRJ002"); // slot 1
/// assert_eq!(schedule[1].project.code, "PRJ001"); // slot 2
/// ```
#[derive(Debug, Clone)]
pub struct SlotScheduler {
    slot_count: u32,
}

impl SlotScheduler {
    /// Creates a scheduler with the default five-slot week.
    pub fn new() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
        }
    }

    /// Sets the slot count.
    pub fn with_slot_count(mut self, slot_count: u32) -> Self {
        self.slot_count = slot_count;
        self
    }

    /// Number of slots this scheduler fills.
    pub fn slot_count(&self) -> u32 {
        self.slot_count
    }

    /// Sequences projects into slots, maximizing captured revenue.
    ///
    /// Returns assignments in ascending slot order. Projects that cannot
    /// be placed within their deadline are omitted; recover the dropped
    /// count as `projects.len() - result.len()`.
    ///
    /// Total over its input domain: empty input yields an empty schedule,
    /// and no input makes it panic or return an error.
    pub fn schedule(&self, projects: &[Project]) -> Vec<ScheduledAssignment> {
        // Stable sort by revenue descending; ties keep input order.
        let mut order: Vec<usize> = (0..projects.len()).collect();
        order.sort_by(|&a, &b| projects[b].revenue.total_cmp(&projects[a].revenue));

        let mut slots: Vec<Option<ScheduledAssignment>> = vec![None; self.slot_count as usize];

        for &idx in &order {
            let project = &projects[idx];
            let max_slot = self.slot_count.min(project.deadline);

            // Latest feasible slot first, so earlier slots stay free for
            // tighter deadlines.
            let mut placed = false;
            for slot in (1..=max_slot).rev() {
                let cell = &mut slots[(slot - 1) as usize];
                if cell.is_none() {
                    *cell = Some(ScheduledAssignment::new(project.clone(), slot));
                    placed = true;
                    break;
                }
            }

            if !placed {
                debug!(
                    "capacity miss: project {} (deadline {}, revenue {}) dropped",
                    project.code, project.deadline, project.revenue
                );
            }
        }

        slots.into_iter().flatten().collect()
    }
}

impl Default for SlotScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make_project(code: &str, deadline: u32, revenue: f64) -> Project {
        Project::new(code, format!("{code} title"), deadline, revenue)
    }

    #[test]
    fn test_classic_scenario() {
        // A(d=2,100), B(d=1,80), C(d=2,60) → slot1=B, slot2=A, C dropped.
        let projects = vec![
            make_project("A", 2, 100.0),
            make_project("B", 1, 80.0),
            make_project("C", 2, 60.0),
        ];
        let schedule = SlotScheduler::new().schedule(&projects);

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].slot, 1);
        assert_eq!(schedule[0].project.code, "B");
        assert_eq!(schedule[1].slot, 2);
        assert_eq!(schedule[1].project.code, "A");

        let total: f64 = schedule.iter().map(|a| a.revenue()).sum();
        assert!((total - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_deadline_keeps_higher_revenue() {
        // Both deadline 1: only the 70-revenue project fits.
        let projects = vec![make_project("low", 1, 50.0), make_project("high", 1, 70.0)];
        let schedule = SlotScheduler::new().schedule(&projects);

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].slot, 1);
        assert_eq!(schedule[0].project.code, "high");
    }

    #[test]
    fn test_latest_feasible_slot_preferred() {
        // Single project with deadline 4 lands on slot 4, not slot 1.
        let projects = vec![make_project("A", 4, 10.0)];
        let schedule = SlotScheduler::new().schedule(&projects);
        assert_eq!(schedule[0].slot, 4);
    }

    #[test]
    fn test_slots_unique_and_within_deadline() {
        let projects = vec![
            make_project("A", 5, 10.0),
            make_project("B", 3, 90.0),
            make_project("C", 3, 50.0),
            make_project("D", 1, 70.0),
            make_project("E", 5, 30.0),
            make_project("F", 2, 20.0),
        ];
        let schedule = SlotScheduler::new().schedule(&projects);

        assert!(schedule.len() <= 5);
        let slots: HashSet<u32> = schedule.iter().map(|a| a.slot).collect();
        assert_eq!(slots.len(), schedule.len());
        for a in &schedule {
            assert!(a.slot <= a.project.deadline);
            assert!(a.slot >= 1);
        }
    }

    #[test]
    fn test_output_in_ascending_slot_order() {
        let projects = vec![
            make_project("A", 5, 10.0),
            make_project("B", 2, 90.0),
            make_project("C", 4, 50.0),
        ];
        let schedule = SlotScheduler::new().schedule(&projects);
        for pair in schedule.windows(2) {
            assert!(pair[0].slot < pair[1].slot);
        }
    }

    #[test]
    fn test_revenue_tie_keeps_input_order() {
        // Equal revenue, both deadline 1: the earlier input wins the slot.
        let projects = vec![make_project("first", 1, 40.0), make_project("second", 1, 40.0)];
        let schedule = SlotScheduler::new().schedule(&projects);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].project.code, "first");
    }

    #[test]
    fn test_deadline_beyond_slot_count_clamped() {
        let projects = vec![make_project("A", 9, 10.0)];
        let schedule = SlotScheduler::new().schedule(&projects);
        assert_eq!(schedule[0].slot, 5);
    }

    #[test]
    fn test_more_projects_than_slots() {
        let projects: Vec<Project> = (0..8)
            .map(|i| make_project(&format!("P{i}"), 5, 100.0 - i as f64))
            .collect();
        let schedule = SlotScheduler::new().schedule(&projects);

        // Five highest-revenue projects survive.
        assert_eq!(schedule.len(), 5);
        let codes: HashSet<&str> = schedule.iter().map(|a| a.project.code.as_str()).collect();
        for i in 0..5 {
            assert!(codes.contains(format!("P{i}").as_str()));
        }
    }

    #[test]
    fn test_empty_input() {
        let schedule = SlotScheduler::new().schedule(&[]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_custom_slot_count() {
        let scheduler = SlotScheduler::new().with_slot_count(2);
        let projects = vec![
            make_project("A", 2, 30.0),
            make_project("B", 2, 20.0),
            make_project("C", 2, 10.0),
        ];
        let schedule = scheduler.schedule(&projects);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].project.code, "B");
        assert_eq!(schedule[1].project.code, "A");
    }
}
