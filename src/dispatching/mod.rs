//! Objective-driven ordering of truck types.
//!
//! Each scheduling objective maps to a dispatching rule that scores truck
//! types; the bay scheduler attempts types in ascending score order.
//!
//! # Usage
//!
//! ```
//! use bay_throughput::dispatching::Objective;
//! use bay_throughput::models::TruckType;
//!
//! let types = vec![TruckType::new(30.0, 90.0), TruckType::new(10.0, 40.0)];
//! assert_eq!(Objective::MaxTrucks.sort_indices(&types), vec![1, 0]);
//! assert_eq!(Objective::MaxVolume.sort_indices(&types), vec![0, 1]);
//! ```

pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::models::TruckType;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (attempted first).
pub type RuleScore = f64;

/// A dispatching rule that ranks truck types.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SCT").
    fn name(&self) -> &'static str;

    /// Scores a truck type.
    fn evaluate(&self, truck: &TruckType) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// What the bay scheduler maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Objective {
    /// Number of loaded trucks: fastest cycle first.
    #[default]
    MaxTrucks,
    /// Total volume: largest truck first.
    MaxVolume,
    /// Volume per minute of cycle time: best ratio first.
    MaxEfficiency,
}

/// Error returned when parsing an unknown objective name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownObjective(pub String);

impl fmt::Display for UnknownObjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown objective '{}' (expected maxTrucks, maxVolume or maxEfficiency)",
            self.0
        )
    }
}

impl std::error::Error for UnknownObjective {}

impl Objective {
    /// All objectives.
    pub const ALL: [Objective; 3] = [
        Objective::MaxTrucks,
        Objective::MaxVolume,
        Objective::MaxEfficiency,
    ];

    /// The rule ranking truck types for this objective.
    pub fn rule(self) -> &'static dyn DispatchingRule {
        match self {
            Objective::MaxTrucks => &rules::Sct,
            Objective::MaxVolume => &rules::Lv,
            Objective::MaxEfficiency => &rules::Bvr,
        }
    }

    /// Whether a fill pass restarts from the top priority type after each
    /// accepted load.
    ///
    /// `MaxTrucks` exhausts the whole pass instead.
    pub fn restarts_after_assignment(self) -> bool {
        matches!(self, Objective::MaxVolume | Objective::MaxEfficiency)
    }

    /// Returns indices into `types`, highest priority first.
    ///
    /// The sort is stable: equally scored types keep their input order.
    /// NaN scores rank last.
    pub fn sort_indices(self, types: &[TruckType]) -> Vec<usize> {
        let rule = self.rule();
        let scores: Vec<RuleScore> = types
            .iter()
            .map(|t| {
                let score = rule.evaluate(t);
                if score.is_nan() {
                    f64::INFINITY
                } else {
                    score
                }
            })
            .collect();

        let mut indices: Vec<usize> = (0..types.len()).collect();
        indices.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
        indices
    }

    /// Identifier used in requests (`maxTrucks`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Objective::MaxTrucks => "maxTrucks",
            Objective::MaxVolume => "maxVolume",
            Objective::MaxEfficiency => "maxEfficiency",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = UnknownObjective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Objective::ALL
            .into_iter()
            .find(|o| o.as_str() == s.trim())
            .ok_or_else(|| UnknownObjective(s.to_string()))
    }
}
