//! Margin scenarios.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Uncertainty assumption applied uniformly to every margin-bearing input.
///
/// Each mode maps to a signed factor `m`: optimistic `+1` shortens every
/// duration and widens the time window, pessimistic `-1` does the reverse,
/// average `0` uses nominal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginMode {
    /// Everything finishes faster, the window is wider.
    Optimistic,
    /// Nominal values.
    Average,
    /// Everything takes longer, the window is narrower.
    Pessimistic,
}

impl MarginMode {
    /// All modes in reporting order.
    pub const ALL: [MarginMode; 3] = [
        MarginMode::Optimistic,
        MarginMode::Average,
        MarginMode::Pessimistic,
    ];

    /// Signed margin factor `m`.
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            MarginMode::Optimistic => 1.0,
            MarginMode::Average => 0.0,
            MarginMode::Pessimistic => -1.0,
        }
    }

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            MarginMode::Optimistic => "optimistic",
            MarginMode::Average => "average",
            MarginMode::Pessimistic => "pessimistic",
        }
    }
}

impl fmt::Display for MarginMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
