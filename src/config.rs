//! Planning request files.
//!
//! A request is a flat JSON object carrying every input field plus an
//! optional `objective` (default `maxTrucks`):
//!
//! ```json
//! {
//!   "targetTime": 480, "targetTimeMargin": 0.1,
//!   "volumes": [10, 20, 30],
//!   "flowRate": 60, "flowRateMargin": 0.1,
//!   "numBays": 3,
//!   "distance": 12, "speed": 50, "speedMargin": 0.15,
//!   "protocol1": 10, "protocol1Margin": 0.2,
//!   "protocol2": 8, "protocol2Margin": 0.2,
//!   "objective": "maxVolume"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::dispatching::Objective;
use crate::error::PlanError;
use crate::models::Parameters;
use crate::optimizer::{self, PlanReport};

/// A planning request: parameters and objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(flatten)]
    pub parameters: Parameters,
    #[serde(default)]
    pub objective: Objective,
}

impl PlanRequest {
    /// Creates a request.
    pub fn new(parameters: Parameters, objective: Objective) -> Self {
        Self {
            parameters,
            objective,
        }
    }

    /// Parses a request from JSON text.
    pub fn from_json(text: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a request file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading plan request");
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the request as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates and runs the request.
    pub fn run(&self) -> Result<PlanReport, PlanError> {
        optimizer::plan(&self.parameters, self.objective)
    }
}
