//! Planning parameters.
//!
//! The immutable input record of one optimization request. Field names
//! serialize in camelCase so request files use the same names as the
//! loading-bay input form (`targetTime`, `flowRateMargin`, ...).
//!
//! # Units
//!
//! | Field | Unit |
//! |-------|------|
//! | `target_time`, `protocol1`, `protocol2` | minutes |
//! | `volumes` | m³ |
//! | `flow_rate` | m³/h |
//! | `distance` | km |
//! | `speed` | km/h |
//! | `*_margin` | fraction in [0, 1] |

use serde::{Deserialize, Serialize};

/// Input record for a bay throughput estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// Time window in which trucks must be processed (minutes).
    pub target_time: f64,
    /// Relative uncertainty on the time window.
    pub target_time_margin: f64,
    /// Truck type volumes (m³). Duplicates are independent truck types.
    pub volumes: Vec<f64>,
    /// Loading flow rate (m³/h).
    pub flow_rate: f64,
    /// Relative uncertainty on the flow rate.
    pub flow_rate_margin: f64,
    /// Number of interchangeable loading bays.
    pub num_bays: usize,
    /// One-way travel distance to the bays (km).
    pub distance: f64,
    /// Average truck speed (km/h).
    pub speed: f64,
    /// Relative uncertainty on the speed.
    pub speed_margin: f64,
    /// Control protocol before loading (minutes).
    pub protocol1: f64,
    /// Relative uncertainty on the first protocol.
    pub protocol1_margin: f64,
    /// Control protocol after loading (minutes).
    pub protocol2: f64,
    /// Relative uncertainty on the second protocol.
    pub protocol2_margin: f64,
}

impl Parameters {
    /// Creates parameters with nominal values and every margin at zero.
    pub fn new(target_time: f64, volumes: Vec<f64>, flow_rate: f64, num_bays: usize) -> Self {
        Self {
            target_time,
            target_time_margin: 0.0,
            volumes,
            flow_rate,
            flow_rate_margin: 0.0,
            num_bays,
            distance: 0.0,
            speed: 1.0,
            speed_margin: 0.0,
            protocol1: 0.0,
            protocol1_margin: 0.0,
            protocol2: 0.0,
            protocol2_margin: 0.0,
        }
    }

    /// Sets the travel leg (distance in km, speed in km/h).
    pub fn with_travel(mut self, distance: f64, speed: f64) -> Self {
        self.distance = distance;
        self.speed = speed;
        self
    }

    /// Sets both control protocol durations (minutes).
    pub fn with_protocols(mut self, protocol1: f64, protocol2: f64) -> Self {
        self.protocol1 = protocol1;
        self.protocol2 = protocol2;
        self
    }

    /// Sets the time window margin.
    pub fn with_target_time_margin(mut self, margin: f64) -> Self {
        self.target_time_margin = margin;
        self
    }

    /// Sets the flow rate margin.
    pub fn with_flow_rate_margin(mut self, margin: f64) -> Self {
        self.flow_rate_margin = margin;
        self
    }

    /// Sets the speed margin.
    pub fn with_speed_margin(mut self, margin: f64) -> Self {
        self.speed_margin = margin;
        self
    }

    /// Sets both protocol margins.
    pub fn with_protocol_margins(mut self, protocol1: f64, protocol2: f64) -> Self {
        self.protocol1_margin = protocol1;
        self.protocol2_margin = protocol2;
        self
    }

    /// Applies the same margin to every margin-bearing field.
    pub fn with_uniform_margin(self, margin: f64) -> Self {
        self.with_target_time_margin(margin)
            .with_flow_rate_margin(margin)
            .with_speed_margin(margin)
            .with_protocol_margins(margin, margin)
    }

    /// Nominal round-trip travel time (minutes).
    pub fn nominal_round_trip(&self) -> f64 {
        2.0 * (self.distance / self.speed * 60.0)
    }

    /// Shortest cycle a truck could ever need, ignoring loading and margins.
    ///
    /// Used by the global feasibility pre-check.
    pub fn fixed_overhead(&self) -> f64 {
        self.protocol1 + self.protocol2 + self.nominal_round_trip()
    }
}
