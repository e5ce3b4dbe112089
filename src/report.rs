//! Plain-text rendering of a plan report.

use std::fmt::{self, Write};

use crate::optimizer::PlanReport;
use crate::scheduler::ScenarioResult;

/// Renders advisories, then one block per scenario.
///
/// Rounding happens here only: average time to 2 decimals, efficiency to
/// 3, utilization to 1. Bays are numbered from 1.
pub fn render_text(report: &PlanReport) -> String {
    let mut out = String::new();
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &PlanReport) -> fmt::Result {
    writeln!(out, "Results ({})", report.objective)?;
    writeln!(out)?;

    if !report.has_feasible_scenario() {
        writeln!(
            out,
            "WARNING: No truck configuration can be completed within the target time, even with all bays in use."
        )?;
        writeln!(out)?;
    }

    for advisory in &report.advisories {
        writeln!(out, "{}", advisory.severity.as_str().to_uppercase())?;
        writeln!(out, "  {}", advisory.text)?;
    }
    if !report.advisories.is_empty() {
        writeln!(out)?;
    }

    for scenario in &report.scenarios {
        write_scenario(out, scenario)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_scenario(out: &mut String, scenario: &ScenarioResult) -> fmt::Result {
    writeln!(out, "{} SCENARIO", scenario.mode.as_str().to_uppercase())?;
    writeln!(out, "  Total volume transported    {:.2} m³", scenario.total_volume)?;
    writeln!(out, "  Number of trucks used       {}", scenario.num_trucks)?;
    writeln!(out, "  Average duration per truck  {:.2} min", scenario.avg_time)?;
    writeln!(out, "  Volume efficiency           {:.3} m³/h", scenario.efficiency)?;

    writeln!(out, "  Trucks used by type")?;
    for d in scenario.volume_distribution.iter().filter(|d| d.count > 0) {
        writeln!(out, "    {} m³ trucks: {} truck(s)", d.volume, d.count)?;
    }

    writeln!(out, "  Bay utilization (%)")?;
    for (i, utilization) in scenario.bay_utilization.iter().enumerate() {
        writeln!(out, "    Bay {}: {:.1}%", i + 1, utilization)?;
    }
    Ok(())
}
