//! Advisory diagnostics over the three scenario results.
//!
//! Inspects optimistic, average and pessimistic results for qualitative
//! signals and emits messages for the presentation layer. Checks run in a
//! fixed order and each contributes at most one message:
//!
//! 1. identical volumes (info)
//! 2. saturated bays, max average utilization > 95% (warning)
//! 3. underused bays, max average utilization < 30% with several bays (suggestion)
//! 4. volumes never used in any scenario (warning)
//! 5. truck count spread above `max(1, 0.3 · max trucks)` (caution)
//! 6. fewer distinct volumes used than configured (info)
//! 7. minimum efficiency below 5 m³/h (warning)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scheduler::ScenarioResult;

/// Average utilization above which bays count as saturated (%).
pub const SATURATION_THRESHOLD: f64 = 95.0;
/// Average utilization below which bays count as underused (%).
pub const UNDERUSE_THRESHOLD: f64 = 30.0;
/// Relative truck count spread that flags high margin sensitivity.
pub const VARIABILITY_RATIO: f64 = 0.3;
/// Efficiency below which throughput is flagged (m³/h).
pub const LOW_EFFICIENCY_THRESHOLD: f64 = 5.0;

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral observation about the configuration.
    Info,
    /// Saturation, unused truck types or very low efficiency.
    Warning,
    /// Results are sensitive to the error margins.
    Caution,
    /// A configuration change worth considering.
    Suggestion,
}

impl Severity {
    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Caution => "caution",
            Severity::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An advisory message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryMessage {
    /// Message category.
    pub severity: Severity,
    /// Human-readable message, utilization and efficiency already rounded.
    pub text: String,
}

impl AdvisoryMessage {
    fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }
}

/// Runs every check over the scenario results.
///
/// # Arguments
/// * `results` - The scenario results (normally optimistic, average, pessimistic).
/// * `volumes` - The configured volumes, duplicates included.
/// * `num_bays` - The configured bay count.
pub fn analyze(
    results: &[ScenarioResult],
    volumes: &[f64],
    num_bays: usize,
) -> Vec<AdvisoryMessage> {
    let mut messages = Vec::new();
    if results.is_empty() {
        return messages;
    }

    let max_trucks = results.iter().map(|r| r.num_trucks).max().unwrap_or(0);
    let min_trucks = results.iter().map(|r| r.num_trucks).min().unwrap_or(0);
    let max_avg_utilization = results
        .iter()
        .map(|r| r.average_utilization())
        .fold(f64::NEG_INFINITY, f64::max);

    let mut used: Vec<f64> = Vec::new();
    for result in results {
        for d in &result.volume_distribution {
            if d.count > 0 && !used.contains(&d.volume) {
                used.push(d.volume);
            }
        }
    }

    let all_same = volumes.iter().all(|&v| v == volumes[0]);
    if all_same && volumes.len() > 1 {
        messages.push(AdvisoryMessage::new(
            Severity::Info,
            "All truck types have the same volume. The choice of truck type is not significant in this case.",
        ));
    }

    if max_avg_utilization > SATURATION_THRESHOLD {
        messages.push(AdvisoryMessage::new(
            Severity::Warning,
            format!(
                "Loading bays are saturated ({max_avg_utilization:.1}% utilization). Adding more bays could significantly improve results."
            ),
        ));
    }

    if max_avg_utilization < UNDERUSE_THRESHOLD && num_bays > 1 {
        messages.push(AdvisoryMessage::new(
            Severity::Suggestion,
            format!(
                "Bays are underused ({max_avg_utilization:.1}% utilization). You could reduce the number of bays or extend the target time to process more trucks."
            ),
        ));
    }

    let unused: Vec<String> = volumes
        .iter()
        .filter(|&&v| !used.contains(&v))
        .map(|v| v.to_string())
        .collect();
    if !unused.is_empty() {
        messages.push(AdvisoryMessage::new(
            Severity::Warning,
            format!(
                "Some truck types ({} m³) are not being used. They may be too slow or inefficient given current constraints.",
                unused.join(", ")
            ),
        ));
    }

    let spread = max_trucks - min_trucks;
    let tolerated = (max_trucks as f64 * VARIABILITY_RATIO).max(1.0);
    if spread as f64 > tolerated {
        messages.push(AdvisoryMessage::new(
            Severity::Caution,
            format!(
                "High variability between scenarios ({spread} trucks difference). Error margins have significant impact - consider reducing uncertainties."
            ),
        ));
    }

    if used.len() < volumes.len() && volumes.len() > 1 {
        messages.push(AdvisoryMessage::new(
            Severity::Info,
            format!(
                "Using {} out of {} available truck types. This is optimal given the current constraints and objective.",
                used.len(),
                volumes.len()
            ),
        ));
    }

    let min_efficiency = results
        .iter()
        .map(|r| r.efficiency)
        .fold(f64::INFINITY, f64::min);
    if min_efficiency < LOW_EFFICIENCY_THRESHOLD {
        messages.push(AdvisoryMessage::new(
            Severity::Warning,
            format!(
                "Very low efficiency ({min_efficiency:.2} m³/h). Protocol or transport times seem too high compared to loading flow rate."
            ),
        ));
    }

    messages
}
