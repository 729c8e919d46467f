//! Application services for reporting and aggregation.

mod overview;

pub use overview::{ReportingError, ReportingResult, ReportingService};
