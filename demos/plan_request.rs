//! Plans a request file and prints the text report.
//!
//! ```text
//! cargo run --example plan_request -- demos/depot.json
//! RUST_LOG=bay_throughput=debug cargo run --example plan_request -- demos/depot.json
//! ```

use std::process::ExitCode;

use bay_throughput::{logging, report, PlanRequest};
use tracing::error;

fn main() -> ExitCode {
    logging::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: plan_request <request.json>");
        return ExitCode::FAILURE;
    };

    match PlanRequest::from_path(&path).and_then(|request| request.run()) {
        Ok(plan) => {
            print!("{}", report::render_text(&plan));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%path, %err, "planning failed");
            ExitCode::FAILURE
        }
    }
}
