//! Greedy bay scheduler and scenario metrics.
//!
//! # Algorithm
//!
//! `BayScheduler` repeatedly places one load of the highest-priority truck
//! type that still fits on the least-loaded eligible bay, until a full
//! pass places nothing. It is a fast, reproducible heuristic, not an
//! optimal bin-packing solver.
//!
//! # KPI
//!
//! `ScenarioResult` summarizes a finished schedule: volume, truck count,
//! average cycle time, volumetric efficiency, per-volume counts and
//! per-bay utilization.

mod greedy;
mod kpi;

pub use greedy::BayScheduler;
pub use kpi::ScenarioResult;
