//! Truck type model.

use serde::{Deserialize, Serialize};

/// A schedulable truck type: one load of `volume` occupying a bay for
/// `cycle_time` minutes (protocols, round trip and loading included).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruckType {
    /// Load volume (m³).
    pub volume: f64,
    /// Total cycle time (minutes).
    pub cycle_time: f64,
}

impl TruckType {
    /// Creates a truck type.
    pub fn new(volume: f64, cycle_time: f64) -> Self {
        Self { volume, cycle_time }
    }

    /// Volume moved per minute of cycle time.
    ///
    /// Zero when the cycle time is unbounded.
    #[inline]
    pub fn throughput(&self) -> f64 {
        self.volume / self.cycle_time
    }

    /// Whether this type can ever be placed on a bay.
    ///
    /// A degenerate cycle time (non-finite or not strictly positive) is
    /// never placeable.
    #[inline]
    pub fn is_schedulable(&self) -> bool {
        self.cycle_time.is_finite() && self.cycle_time > 0.0
    }
}
