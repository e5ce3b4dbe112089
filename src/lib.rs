//! Loading-bay throughput estimation under uncertainty.
//!
//! Estimates how many trucks of various volumes a fixed number of loading
//! bays can process within a time budget, under optimistic, average and
//! pessimistic margin assumptions.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Parameters`, `MarginMode`, `TruckType`,
//!   `Bay`, `ScheduleEntry`, `BaySchedule`
//! - **`timing`**: Margin-aware truck cycle times and scenario time limits
//! - **`dispatching`**: Scheduling objectives and their ordering rules
//! - **`scheduler`**: Greedy least-loaded bay filler and scenario metrics
//! - **`optimizer`**: Three-scenario runs and the validated planning workflow
//! - **`diagnostics`**: Advisory messages over the scenario results
//! - **`validation`**: Input checks, window pre-check, volume list parsing
//! - **`config`**: JSON planning requests
//! - **`report`**: Plain-text rendering
//!
//! # Example
//!
//! ```
//! use bay_throughput::dispatching::Objective;
//! use bay_throughput::models::Parameters;
//! use bay_throughput::optimizer;
//!
//! let parameters = Parameters::new(30.0, vec![5.0], 30.0, 3)
//!     .with_travel(1.0, 60.0)
//!     .with_protocols(1.0, 1.0);
//! let report = optimizer::plan(&parameters, Objective::MaxTrucks).unwrap();
//! assert_eq!(report.scenarios[1].num_trucks, 6);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//!   (parallel machine models)

pub mod config;
pub mod diagnostics;
pub mod dispatching;
pub mod error;
pub mod logging;
pub mod models;
pub mod optimizer;
pub mod report;
pub mod scheduler;
pub mod timing;
pub mod validation;

pub use config::PlanRequest;
pub use error::PlanError;
pub use optimizer::{optimize, plan, PlanReport};
