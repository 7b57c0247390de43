//! Schedule quality metrics (KPIs).
//!
//! Computes performance indicators for one scheduling run from the
//! produced assignments and the candidate projects that fed it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Captured Revenue | Sum of revenues over scheduled projects |
//! | Missed Revenue | Candidate revenue not captured |
//! | Capacity Misses | Candidates left without a slot |
//! | Slot Utilization | Filled slots / available slots |

use crate::models::{Project, ScheduledAssignment};

/// Performance indicators for one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Sum of revenues over scheduled projects.
    pub captured_revenue: f64,
    /// Candidate revenue that did not make it into the week.
    pub missed_revenue: f64,
    /// Number of scheduled projects.
    pub scheduled_count: usize,
    /// Number of candidates dropped for lack of a feasible slot.
    pub capacity_misses: usize,
    /// Fraction of slots filled (0.0..1.0).
    pub slot_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its candidate pool.
    ///
    /// # Arguments
    /// * `assignments` - Output of one scheduling run.
    /// * `candidates` - The projects offered to the scheduler.
    /// * `slot_count` - Slots the scheduler had available.
    pub fn calculate(
        assignments: &[ScheduledAssignment],
        candidates: &[Project],
        slot_count: u32,
    ) -> Self {
        let captured_revenue: f64 = assignments.iter().map(|a| a.revenue()).sum();
        let candidate_revenue: f64 = candidates.iter().map(|p| p.revenue).sum();

        let slot_utilization = if slot_count == 0 {
            0.0
        } else {
            assignments.len() as f64 / slot_count as f64
        };

        Self {
            captured_revenue,
            missed_revenue: candidate_revenue - captured_revenue,
            scheduled_count: assignments.len(),
            capacity_misses: candidates.len().saturating_sub(assignments.len()),
            slot_utilization,
        }
    }
}
