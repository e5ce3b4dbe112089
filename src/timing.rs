//! Truck cycle-time model.
//!
//! Converts the planning parameters into per-type cycle times for one
//! margin scenario.
//!
//! # Formula
//!
//! With margin factor `m` (see [`MarginMode::factor`]):
//!
//! ```text
//! t1      = protocol1 · (1 − m·protocol1Margin)
//! t2      = protocol2 · (1 − m·protocol2Margin)
//! travel  = distance / (speed · (1 + m·speedMargin)) · 60
//! loading = volume / (flowRate · (1 + m·flowRateMargin)) · 60
//! cycle   = t1 + travel + loading + travel + t2
//! limit   = targetTime · (1 + m·targetTimeMargin)
//! ```
//!
//! A positive `m` shortens every duration and widens the window, so for
//! fixed non-negative margins cycle times are ordered
//! optimistic ≤ average ≤ pessimistic.

use crate::models::{MarginMode, Parameters, TruckType};

/// Computes one truck type per configured volume, in input order.
pub fn compute_truck_types(parameters: &Parameters, mode: MarginMode) -> Vec<TruckType> {
    let m = mode.factor();

    let t1 = parameters.protocol1 * (1.0 - m * parameters.protocol1_margin);
    let t2 = parameters.protocol2 * (1.0 - m * parameters.protocol2_margin);
    let travel =
        parameters.distance / (parameters.speed * (1.0 + m * parameters.speed_margin)) * 60.0;
    let rate = parameters.flow_rate * (1.0 + m * parameters.flow_rate_margin);

    parameters
        .volumes
        .iter()
        .map(|&volume| {
            let loading = volume / rate * 60.0;
            TruckType::new(volume, t1 + travel + loading + travel + t2)
        })
        .collect()
}

/// Time available on each bay in the given scenario (minutes).
pub fn time_limit(parameters: &Parameters, mode: MarginMode) -> f64 {
    parameters.target_time * (1.0 + mode.factor() * parameters.target_time_margin)
}
