//! Monthly revenue aggregation and forecast.
//!
//! # Algorithm
//!
//! `monthly_summaries` walks the given week labels, decodes each to an
//! approximate (year, month) via [`crate::weeklabel`], fetches the
//! week's assignments, and accumulates per-month buckets of revenue,
//! project count and week count. Buckets are emitted in first-seen
//! order of the (year, month) key — the order of `labels`, not a
//! sorted chronology.
//!
//! Malformed labels are skipped with a warning; they never fail the
//! aggregation. Repository failures do propagate.
//!
//! The forecast is a plain historical mean, deliberately not a
//! time-weighted or seasonal model.

use std::collections::HashMap;

use log::warn;

use crate::models::MonthlySummary;
use crate::repo::{RepoResult, ScheduleRepository};
use crate::weeklabel::{label_year_month, month_name};

/// Running totals for one (year, month) bucket.
#[derive(Debug, Default)]
struct Bucket {
    revenue: f64,
    projects: usize,
    weeks: usize,
}

/// Aggregates persisted weekly schedules into per-month summaries.
///
/// One summary per distinct (year, month) key, in the order the key is
/// first produced while walking `labels`. Labels that fail to decode
/// are skipped.
pub fn monthly_summaries<R: ScheduleRepository>(
    labels: &[String],
    schedules: &R,
) -> RepoResult<Vec<MonthlySummary>> {
    let mut order: Vec<(i32, u32)> = Vec::new();
    let mut buckets: HashMap<(i32, u32), Bucket> = HashMap::new();

    for label in labels {
        let key = match label_year_month(label) {
            Ok(key) => key,
            Err(err) => {
                warn!("skipping week label: {err}");
                continue;
            }
        };

        let assignments = schedules.get_by_label(label)?;
        let week_revenue: f64 = assignments.iter().map(|a| a.revenue()).sum();

        let bucket = buckets.entry(key).or_insert_with(|| {
            order.push(key);
            Bucket::default()
        });
        bucket.revenue += week_revenue;
        bucket.projects += assignments.len();
        bucket.weeks += 1;
    }

    Ok(order
        .into_iter()
        .map(|(year, month)| {
            let bucket = &buckets[&(year, month)];
            MonthlySummary::new(
                year,
                month,
                month_name(month),
                bucket.revenue,
                bucket.projects,
                bucket.weeks,
            )
        })
        .collect())
}

/// Predicted revenue for the next month: arithmetic mean of the
/// historical monthly totals. Returns 0.0 for empty history.
pub fn predict_next_month_revenue(summaries: &[MonthlySummary]) -> f64 {
    if summaries.is_empty() {
        return 0.0;
    }
    let total: f64 = summaries.iter().map(|s| s.total_revenue).sum();
    total / summaries.len() as f64
}

/// Confidence of the moving-average prediction, from the number of
/// months of history behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// 6+ months of data.
    High,
    /// 3-5 months of data.
    Medium,
    /// 2 months of data.
    Low,
    /// 0-1 months of data.
    VeryLow,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        };
        f.write_str(label)
    }
}

/// Confidence label for a month count. Thresholds: >=6 High, >=3 Medium,
/// >=2 Low, else Very Low.
pub fn prediction_confidence(month_count: usize) -> Confidence {
    match month_count {
        n if n >= 6 => Confidence::High,
        n if n >= 3 => Confidence::Medium,
        2 => Confidence::Low,
        _ => Confidence::VeryLow,
    }
}
