//! Logging setup and indicator reports.

mod logging;
mod report;

pub use logging::setup_logging;
pub use report::{IndicatorReport, ReportRow};
