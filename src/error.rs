//! Planning error type.

use thiserror::Error;

use crate::dispatching::UnknownObjective;
use crate::validation::ValidationError;

/// Errors raised before or around an optimization run.
///
/// The optimization itself never fails: a scenario where nothing fits is
/// a regular result with zero trucks.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid parameters: {}", summarize(.0))]
    InvalidParameters(Vec<ValidationError>),

    #[error("infeasible time window: {0}")]
    InfeasibleWindow(ValidationError),

    #[error(transparent)]
    UnknownObjective(#[from] UnknownObjective),

    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read request file: {0}")]
    Io(#[from] std::io::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
