//! Core scheduling and analytics for the ProManage weekly planner.
//!
//! Assigns revenue-bearing projects to the discrete slots of a working
//! week under per-project deadlines, and aggregates persisted weekly
//! schedules into monthly revenue summaries with a simple forecast.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Project`, `ScheduledAssignment`,
//!   `WeekSchedule`, `MonthlySummary`
//! - **`scheduler`**: Greedy deadline-constrained job sequencing + KPIs
//! - **`analytics`**: Monthly aggregation, moving-average forecast,
//!   prediction confidence
//! - **`weeklabel`**: Week label codec and week-to-month approximation
//! - **`repo`**: Storage contracts and in-memory implementations
//! - **`validation`**: Candidate-pool integrity checks
//!
//! # Architecture
//!
//! The scheduler and analytics are pure, synchronous computations over
//! in-memory sequences; storage sits behind the `repo` traits and is
//! injected by the caller. No global state, no I/O in the core paths.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms"

pub mod analytics;
pub mod models;
pub mod repo;
pub mod scheduler;
pub mod validation;
pub mod weeklabel;
