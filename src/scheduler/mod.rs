//! Greedy job-sequencing engine and KPI evaluation.
//!
//! `SlotScheduler` fills the discrete slots of a working week with the
//! highest-revenue projects that can still meet their deadlines, and
//! `ScheduleKpi` reports the quality of one run.
//!
//! # Algorithm
//!
//! Greedy weighted job sequencing: revenue-descending order, each project
//! claims the latest free slot within its deadline. Optimal for total
//! revenue with unit-length jobs on a single resource.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms",
//!   Job Sequencing with Deadlines

mod kpi;
mod sequencer;

pub use kpi::ScheduleKpi;
pub use sequencer::{SlotScheduler, DEFAULT_SLOT_COUNT};
