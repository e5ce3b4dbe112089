//! Loading-bay domain models.
//!
//! Provides the data types of a throughput estimate: the input record,
//! the margin scenarios, the truck types derived from them and the bay
//! schedule produced for each scenario.
//!
//! # Domain Mappings
//!
//! | bay-throughput | Scheduling |
//! |----------------|------------|
//! | TruckType | Job class |
//! | ScheduleEntry | Assignment |
//! | Bay | Parallel identical machine |
//! | BaySchedule | Schedule |

mod margin;
mod parameters;
mod schedule;
mod truck;

pub use margin::MarginMode;
pub use parameters::Parameters;
pub use schedule::{Bay, BaySchedule, ScheduleEntry, VolumeCount};
pub use truck::TruckType;
