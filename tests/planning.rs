//! End-to-end planning runs.

use bay_throughput::diagnostics::Severity;
use bay_throughput::dispatching::Objective;
use bay_throughput::models::{MarginMode, Parameters};
use bay_throughput::report::render_text;
use bay_throughput::timing::compute_truck_types;
use bay_throughput::{logging, optimize, plan, PlanError, PlanRequest};

fn depot() -> Parameters {
    Parameters::new(240.0, vec![10.0, 25.0], 40.0, 2)
        .with_travel(15.0, 50.0)
        .with_protocols(8.0, 6.0)
        .with_uniform_margin(0.2)
}

#[test]
fn nothing_fits_in_average_window() {
    logging::init_test();
    let p = Parameters::new(60.0, vec![10.0, 20.0], 15.0, 2)
        .with_travel(10.0, 60.0)
        .with_protocols(5.0, 5.0);

    let types = compute_truck_types(&p, MarginMode::Average);
    assert!((types[0].cycle_time - 70.0).abs() < 1e-9);
    assert!(types[1].cycle_time > types[0].cycle_time);

    let results = optimize(&p, Objective::MaxTrucks);
    assert_eq!(results[1].mode, MarginMode::Average);
    assert_eq!(results[1].num_trucks, 0);

    let report = plan(&p, Objective::MaxTrucks).unwrap();
    assert!(!report.has_feasible_scenario());
}

#[test]
fn single_volume_without_travel() {
    let p = Parameters::new(30.0, vec![5.0], 30.0, 3)
        .with_travel(0.0, 60.0)
        .with_protocols(1.0, 1.0);

    let results = optimize(&p, Objective::MaxTrucks);
    let avg = &results[1];
    assert_eq!(avg.num_trucks, 6);
    assert!((avg.total_volume - 30.0).abs() < 1e-9);
    assert_eq!(format!("{:.2}", avg.avg_time), "12.00");
    assert_eq!(avg.count_for(5.0), 6);
}

#[test]
fn cycle_times_ordered_by_margin_direction() {
    let p = depot();
    let opt = compute_truck_types(&p, MarginMode::Optimistic);
    let avg = compute_truck_types(&p, MarginMode::Average);
    let pes = compute_truck_types(&p, MarginMode::Pessimistic);
    for i in 0..p.volumes.len() {
        assert!(opt[i].cycle_time > 0.0);
        assert!(opt[i].cycle_time <= avg[i].cycle_time);
        assert!(avg[i].cycle_time <= pes[i].cycle_time);
    }
}

#[test]
fn scenario_invariants_hold_for_every_objective() {
    let p = depot();
    for objective in Objective::ALL {
        for r in optimize(&p, objective) {
            let distributed: usize = r.volume_distribution.iter().map(|d| d.count).sum();
            assert_eq!(distributed, r.num_trucks);

            let committed: f64 = r
                .bay_utilization
                .iter()
                .map(|u| u * r.time_limit / 100.0)
                .sum();
            assert!((committed - r.total_time).abs() < 1e-6);
            assert!(r.bay_utilization.iter().all(|&u| u <= 100.0 + 1e-9));
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let p = depot();
    for objective in Objective::ALL {
        assert_eq!(optimize(&p, objective), optimize(&p, objective));
    }
}

#[test]
fn volume_objective_trades_count_for_volume() {
    let p = depot();
    let by_count = optimize(&p, Objective::MaxTrucks);
    let by_volume = optimize(&p, Objective::MaxVolume);
    for (c, v) in by_count.iter().zip(by_volume.iter()) {
        assert!(v.total_volume >= c.total_volume);
        assert!(c.num_trucks >= v.num_trucks);
    }
}

#[test]
fn identical_volumes_always_reported() {
    for objective in Objective::ALL {
        for margin in [0.0, 0.3] {
            let p = Parameters::new(180.0, vec![20.0, 20.0], 60.0, 2)
                .with_travel(5.0, 40.0)
                .with_protocols(4.0, 4.0)
                .with_uniform_margin(margin);
            let report = plan(&p, objective).unwrap();
            assert!(
                report
                    .advisories
                    .iter()
                    .any(|a| a.severity == Severity::Info && a.text.contains("same volume")),
                "{objective} / {margin}: {:?}",
                report.advisories
            );
        }
    }
}

#[test]
fn request_file_to_text_report() {
    let json = r#"{
        "targetTime": 240, "targetTimeMargin": 0.2,
        "volumes": [10, 25],
        "flowRate": 40, "flowRateMargin": 0.2,
        "numBays": 2,
        "distance": 15, "speed": 50, "speedMargin": 0.2,
        "protocol1": 8, "protocol1Margin": 0.2,
        "protocol2": 6, "protocol2Margin": 0.2,
        "objective": "maxTrucks"
    }"#;
    let path = std::env::temp_dir().join(format!("bay-throughput-{}.json", std::process::id()));
    std::fs::write(&path, json).unwrap();

    let request = PlanRequest::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(request.parameters, depot());

    let report = request.run().unwrap();
    let trucks: Vec<usize> = report.scenarios.iter().map(|s| s.num_trucks).collect();
    assert_eq!(trucks, vec![9, 6, 4]);

    let text = render_text(&report);
    assert!(text.contains("OPTIMISTIC SCENARIO"));
    assert!(text.contains("Number of trucks used       9"));
}

#[test]
fn window_precheck_blocks_the_run() {
    let p = Parameters::new(20.0, vec![10.0], 15.0, 1)
        .with_travel(10.0, 60.0)
        .with_protocols(5.0, 5.0);
    let err = plan(&p, Objective::MaxTrucks).unwrap_err();
    assert!(matches!(err, PlanError::InfeasibleWindow(_)));
    assert!(err.to_string().contains("no truck can be processed"));
}

#[test]
fn demo_request_file_plans() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/depot.json");
    let report = PlanRequest::from_path(path).unwrap().run().unwrap();
    assert_eq!(report.objective, Objective::MaxVolume);
    assert!(report.has_feasible_scenario());
    assert!(render_text(&report).starts_with("Results (maxVolume)"));
}
