//! Revenue analytics over persisted weekly schedules.
//!
//! Aggregates historical slot assignments into calendar-month summaries
//! and produces a simple moving-average forecast with a confidence
//! label. Month grouping rides on the week-to-month approximation in
//! [`crate::weeklabel`].

mod revenue;

pub use revenue::{
    monthly_summaries, predict_next_month_revenue, prediction_confidence, Confidence,
};
