//! Greedy least-loaded bay filler.
//!
//! # Algorithm
//!
//! 1. Order truck types by the objective's dispatching rule.
//! 2. Repeat passes over the ordered types. For each type, pick the
//!    least-loaded bay that can still take one more load within the time
//!    limit (lowest index among equal loads) and place one load there.
//! 3. For `MaxVolume` and `MaxEfficiency` a pass ends right after its
//!    first placement, so the next pass starts again at the highest
//!    priority type. `MaxTrucks` finishes the pass.
//! 4. Stop after a pass that places nothing.
//!
//! No backtracking and no optimality guarantee; bays are kept balanced
//! first, objective priority second.
//!
//! # Complexity
//! Every non-final pass places at least one load, so at most
//! `loads + 1` passes of O(t * b) each, where t = truck types, b = bays.

use tracing::trace;

use crate::dispatching::Objective;
use crate::models::{BaySchedule, TruckType};

/// Greedy bay scheduler for one objective.
///
/// # Example
///
/// ```
/// use bay_throughput::dispatching::Objective;
/// use bay_throughput::models::TruckType;
/// use bay_throughput::scheduler::BayScheduler;
///
/// let types = vec![TruckType::new(5.0, 12.0)];
/// let schedule = BayScheduler::new(Objective::MaxTrucks).schedule(&types, 3, 30.0);
/// assert_eq!(schedule.truck_count(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BayScheduler {
    objective: Objective,
}

impl BayScheduler {
    /// Creates a scheduler for an objective.
    pub fn new(objective: Objective) -> Self {
        Self { objective }
    }

    /// The objective this scheduler orders by.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Fills `num_bays` bays of capacity `time_limit` with truck loads.
    pub fn schedule(
        &self,
        truck_types: &[TruckType],
        num_bays: usize,
        time_limit: f64,
    ) -> BaySchedule {
        let ordered: Vec<TruckType> = self
            .objective
            .sort_indices(truck_types)
            .into_iter()
            .map(|i| truck_types[i])
            .collect();

        fill(
            &ordered,
            num_bays,
            time_limit,
            self.objective.restarts_after_assignment(),
        )
    }
}

/// Runs fill passes over already ordered truck types until one places nothing.
fn fill(
    ordered: &[TruckType],
    num_bays: usize,
    time_limit: f64,
    restart_after_assignment: bool,
) -> BaySchedule {
    let mut schedule = BaySchedule::new(num_bays, time_limit);
    let mut passes = 0usize;

    loop {
        passes += 1;
        let mut progressed = false;

        for truck in ordered {
            if let Some(bay) = schedule.least_loaded_feasible_bay(truck) {
                schedule.assign(truck, bay);
                progressed = true;
                if restart_after_assignment {
                    break;
                }
            }
        }

        if !progressed {
            break;
        }
    }

    trace!(
        passes,
        trucks = schedule.truck_count(),
        time_limit,
        "bay fill converged"
    );
    schedule
}
