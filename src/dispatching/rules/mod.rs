//! Built-in truck type dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority truck types.

use super::{DispatchingRule, RuleScore};
use crate::models::TruckType;

/// Shortest Cycle Time.
///
/// Prioritizes truck types that free their bay soonest, which maximizes
/// the number of loads fitting in the window.
#[derive(Debug, Clone, Copy)]
pub struct Sct;

impl DispatchingRule for Sct {
    fn name(&self) -> &'static str {
        "SCT"
    }

    fn evaluate(&self, truck: &TruckType) -> RuleScore {
        truck.cycle_time
    }

    fn description(&self) -> &'static str {
        "Shortest Cycle Time"
    }
}

/// Largest Volume.
#[derive(Debug, Clone, Copy)]
pub struct Lv;

impl DispatchingRule for Lv {
    fn name(&self) -> &'static str {
        "LV"
    }

    fn evaluate(&self, truck: &TruckType) -> RuleScore {
        -truck.volume
    }

    fn description(&self) -> &'static str {
        "Largest Volume"
    }
}

/// Best Volume Rate.
///
/// Prioritizes by volume moved per minute of cycle time.
#[derive(Debug, Clone, Copy)]
pub struct Bvr;

impl DispatchingRule for Bvr {
    fn name(&self) -> &'static str {
        "BVR"
    }

    fn evaluate(&self, truck: &TruckType) -> RuleScore {
        -truck.throughput() // Higher ratio = higher priority → negate
    }

    fn description(&self) -> &'static str {
        "Best Volume Rate"
    }
}
