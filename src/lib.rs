//! jobwire: console intake and workflow report for electrician job bookings.
//!
//! The operator enters jobs one field at a time; each field is validated and
//! re-prompted until it is acceptable. Typing `exit` as the building type
//! ends intake and prints the schedule for every job in entry order.

pub mod cli;
pub mod config;
pub mod error;
pub mod intake;
pub mod jobs;
pub mod report;
pub mod session;

pub use config::{Config, ReportFormat, ReportOptions};
pub use error::{ConfigError, Error, FieldError};
pub use jobs::{BuildingType, CardNumber, JobList, JobRecord};
pub use session::run_session;
