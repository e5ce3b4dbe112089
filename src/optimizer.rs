//! Scenario optimizer.
//!
//! Runs the cycle-time model and the bay scheduler once per margin
//! scenario, in the fixed order optimistic, average, pessimistic.
//!
//! [`optimize`] is the pure core: validated parameters in, three results
//! out. [`plan`] wraps it with input validation, the global window
//! pre-check and diagnostics.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::diagnostics::{self, AdvisoryMessage};
use crate::dispatching::Objective;
use crate::error::PlanError;
use crate::models::{MarginMode, Parameters};
use crate::scheduler::{BayScheduler, ScenarioResult};
use crate::timing;
use crate::validation;

/// Computes the result of one margin scenario.
pub fn run_scenario(
    parameters: &Parameters,
    objective: Objective,
    mode: MarginMode,
) -> ScenarioResult {
    let truck_types = timing::compute_truck_types(parameters, mode);
    let time_limit = timing::time_limit(parameters, mode);

    let schedule =
        BayScheduler::new(objective).schedule(&truck_types, parameters.num_bays, time_limit);
    let result = ScenarioResult::calculate(mode, &schedule, &parameters.volumes);

    debug!(
        %mode,
        %objective,
        time_limit,
        trucks = result.num_trucks,
        total_volume = result.total_volume,
        "scenario scheduled"
    );
    result
}

/// Runs all three margin scenarios.
///
/// Parameters are assumed valid; see [`validation::validate_parameters`].
/// Deterministic: identical inputs give identical results.
pub fn optimize(parameters: &Parameters, objective: Objective) -> [ScenarioResult; 3] {
    MarginMode::ALL.map(|mode| run_scenario(parameters, objective, mode))
}

/// Outcome of a planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    /// Objective the bays were filled for.
    pub objective: Objective,
    /// Optimistic, average and pessimistic results.
    pub scenarios: [ScenarioResult; 3],
    /// Diagnostics over the three scenarios.
    pub advisories: Vec<AdvisoryMessage>,
}

impl PlanReport {
    /// Whether any scenario fits at least one truck.
    ///
    /// When false, no truck configuration completes within the target time
    /// even with every bay in use.
    pub fn has_feasible_scenario(&self) -> bool {
        self.scenarios.iter().any(|s| s.is_feasible())
    }

    /// Result of a given scenario.
    pub fn scenario(&self, mode: MarginMode) -> &ScenarioResult {
        let index = MarginMode::ALL
            .iter()
            .position(|&m| m == mode)
            .unwrap_or_default();
        &self.scenarios[index]
    }
}

/// Validates, optimizes and diagnoses a request.
///
/// # Errors
/// - [`PlanError::InvalidParameters`] listing every invalid field.
/// - [`PlanError::InfeasibleWindow`] when protocols and travel alone exceed
///   the target time.
#[instrument(
    skip(parameters),
    fields(bays = parameters.num_bays, volumes = parameters.volumes.len())
)]
pub fn plan(parameters: &Parameters, objective: Objective) -> Result<PlanReport, PlanError> {
    if let Err(errors) = validation::validate_parameters(parameters) {
        warn!(count = errors.len(), "rejected invalid parameters");
        return Err(PlanError::InvalidParameters(errors));
    }
    if let Err(err) = validation::check_window(parameters) {
        warn!(target_time = parameters.target_time, "rejected infeasible window");
        return Err(PlanError::InfeasibleWindow(err));
    }

    let scenarios = optimize(parameters, objective);
    let advisories = diagnostics::analyze(&scenarios, &parameters.volumes, parameters.num_bays);

    let report = PlanReport {
        objective,
        scenarios,
        advisories,
    };

    if !report.has_feasible_scenario() {
        warn!("no truck configuration fits within the target time in any scenario");
    }
    info!(
        optimistic = report.scenarios[0].num_trucks,
        average = report.scenarios[1].num_trucks,
        pessimistic = report.scenarios[2].num_trucks,
        advisories = report.advisories.len(),
        "plan completed"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    fn infeasible() -> Parameters {
        Parameters::new(60.0, vec![10.0, 20.0], 15.0, 2)
            .with_travel(10.0, 60.0)
            .with_protocols(5.0, 5.0)
    }

    #[test]
    fn test_scenario_order() {
        let results = optimize(&infeasible(), Objective::MaxTrucks);
        let modes: Vec<MarginMode> = results.iter().map(|r| r.mode).collect();
        assert_eq!(modes, MarginMode::ALL.to_vec());
    }

    #[test]
    fn test_average_scenario_infeasible() {
        let results = optimize(&infeasible(), Objective::MaxTrucks);
        let avg = &results[1];
        assert_eq!(avg.num_trucks, 0);
        assert_eq!(avg.total_volume, 0.0);
        assert_eq!(avg.bay_utilization, vec![0.0, 0.0]);
        assert_eq!(avg.count_for(10.0), 0);
        assert_eq!(avg.count_for(20.0), 0);
    }

    #[test]
    fn test_plan_reports_infeasible_scenarios_without_error() {
        let report = plan(&infeasible(), Objective::MaxTrucks).unwrap();
        assert!(!report.has_feasible_scenario());
        assert!(report
            .advisories
            .iter()
            .any(|a| a.severity == Severity::Warning && a.text.contains("not being used")));
    }

    #[test]
    fn test_single_type_fills_bays() {
        let p = Parameters::new(30.0, vec![5.0], 30.0, 3)
            .with_travel(0.0, 50.0)
            .with_protocols(1.0, 1.0);
        let avg = run_scenario(&p, Objective::MaxTrucks, MarginMode::Average);
        assert_eq!(avg.num_trucks, 6);
        assert!((avg.total_volume - 30.0).abs() < 1e-9);
        assert!((avg.avg_time - 12.0).abs() < 1e-9);
        assert!(avg.bay_utilization.iter().all(|u| (u - 80.0).abs() < 1e-9));
    }

    #[test]
    fn test_optimistic_never_worse_on_count() {
        let p = Parameters::new(240.0, vec![10.0, 25.0], 40.0, 2)
            .with_travel(15.0, 50.0)
            .with_protocols(8.0, 6.0)
            .with_uniform_margin(0.2);
        let [opt, avg, pes] = optimize(&p, Objective::MaxTrucks);
        assert!(opt.num_trucks >= avg.num_trucks);
        assert!(avg.num_trucks >= pes.num_trucks);
    }

    #[test]
    fn test_plan_rejects_invalid() {
        let mut p = infeasible();
        p.speed_margin = 2.0;
        match plan(&p, Objective::MaxTrucks) {
            Err(PlanError::InvalidParameters(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "speedMargin");
            }
            other => panic!("expected invalid parameters, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_rejects_infeasible_window() {
        let mut p = infeasible();
        p.target_time = 25.0;
        assert!(matches!(
            plan(&p, Objective::MaxVolume),
            Err(PlanError::InfeasibleWindow(_))
        ));
    }

    #[test]
    fn test_report_scenario_lookup() {
        let report = plan(&infeasible(), Objective::MaxEfficiency).unwrap();
        assert_eq!(report.scenario(MarginMode::Pessimistic).mode, MarginMode::Pessimistic);
        assert_eq!(report.scenario(MarginMode::Optimistic).mode, MarginMode::Optimistic);
    }
}
