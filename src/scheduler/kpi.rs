//! Scenario result metrics.
//!
//! Computes throughput indicators from a completed bay schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total volume | Sum of accepted load volumes (m³) |
//! | Trucks | Number of accepted loads |
//! | Average time | Total cycle time / trucks (minutes) |
//! | Efficiency | Total volume / total cycle time · 60 (m³/h) |
//! | Volume distribution | Accepted loads per configured volume |
//! | Bay utilization | Committed time / time limit · 100, per bay |

use serde::{Deserialize, Serialize};

use crate::models::{BaySchedule, MarginMode, VolumeCount};

/// Throughput indicators of one margin scenario.
///
/// Values are unrounded; formatting belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    /// Margin scenario.
    pub mode: MarginMode,
    /// Sum of accepted volumes (m³).
    pub total_volume: f64,
    /// Number of accepted loads.
    pub num_trucks: usize,
    /// Sum of accepted cycle times (minutes).
    pub total_time: f64,
    /// Mean cycle time per accepted load (minutes). 0 when nothing was accepted.
    pub avg_time: f64,
    /// Volume per hour of committed bay time (m³/h). 0 when nothing was accepted.
    pub efficiency: f64,
    /// Time available on each bay in this scenario (minutes).
    pub time_limit: f64,
    /// Accepted loads per distinct configured volume, in input order.
    pub volume_distribution: Vec<VolumeCount>,
    /// Utilization percentage per bay, by bay index.
    pub bay_utilization: Vec<f64>,
}

impl ScenarioResult {
    /// Computes the indicators of a scenario schedule.
    ///
    /// # Arguments
    /// * `mode` - The scenario the schedule was built for.
    /// * `schedule` - The completed bay schedule.
    /// * `volumes` - The configured volumes (for the distribution).
    pub fn calculate(mode: MarginMode, schedule: &BaySchedule, volumes: &[f64]) -> Self {
        let num_trucks = schedule.truck_count();
        let total_volume = schedule.total_volume();
        let total_time = schedule.total_time();

        let avg_time = if num_trucks == 0 {
            0.0
        } else {
            total_time / num_trucks as f64
        };

        let efficiency = if total_time > 0.0 {
            total_volume / total_time * 60.0
        } else {
            0.0
        };

        Self {
            mode,
            total_volume,
            num_trucks,
            total_time,
            avg_time,
            efficiency,
            time_limit: schedule.time_limit,
            volume_distribution: schedule.volume_distribution(volumes),
            bay_utilization: schedule.all_utilizations(),
        }
    }

    /// Whether at least one truck fits in this scenario.
    pub fn is_feasible(&self) -> bool {
        self.num_trucks > 0
    }

    /// Mean of the per-bay utilization percentages (0 with no bays).
    pub fn average_utilization(&self) -> f64 {
        if self.bay_utilization.is_empty() {
            0.0
        } else {
            self.bay_utilization.iter().sum::<f64>() / self.bay_utilization.len() as f64
        }
    }

    /// Accepted loads of a given volume (0 if not configured).
    pub fn count_for(&self, volume: f64) -> usize {
        self.volume_distribution
            .iter()
            .find(|d| d.volume == volume)
            .map(|d| d.count)
            .unwrap_or(0)
    }
}
