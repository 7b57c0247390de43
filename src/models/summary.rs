//! Monthly revenue summary model.
//!
//! Derived on demand from persisted weekly schedules, never stored.
//!
//! # Invariants
//! - `weeks_recorded >= 1` for any emitted summary (a bucket only exists
//!   once at least one week mapped into it).
//! - `total_revenue` equals the sum of revenues of all projects appearing
//!   in the contributing weeks.

use serde::{Deserialize, Serialize};

/// Aggregated revenue figures for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Full month name ("January".."December").
    pub month_name: String,
    /// Sum of revenues across all contributing weeks.
    pub total_revenue: f64,
    /// Number of scheduled projects across the contributing weeks.
    pub projects_scheduled: usize,
    /// Number of weekly schedules that mapped into this month.
    pub weeks_recorded: usize,
}

impl MonthlySummary {
    /// Creates a summary.
    pub fn new(
        year: i32,
        month: u32,
        month_name: impl Into<String>,
        total_revenue: f64,
        projects_scheduled: usize,
        weeks_recorded: usize,
    ) -> Self {
        Self {
            year,
            month,
            month_name: month_name.into(),
            total_revenue,
            projects_scheduled,
            weeks_recorded,
        }
    }

    /// Average revenue per contributing week.
    pub fn avg_revenue_per_week(&self) -> f64 {
        if self.weeks_recorded == 0 {
            0.0
        } else {
            self.total_revenue / self.weeks_recorded as f64
        }
    }
}
