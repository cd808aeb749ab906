//! Analytical core - validation, aggregation, time-series and log analysis
//!
//! Every function here is a pure computation over data handed in by the
//! caller. Nothing in this module performs I/O or reads global state, so
//! independent analyses can run side by side.
//!
//! ## Architecture
//! - `validator`: type/range checks on production values
//! - `aggregator`: mean, top-N ranking and series extraction
//! - `time_series`: moving average, z-score anomalies, trend direction
//! - `log_classifier`: severity counts, error extraction, regex search

pub mod aggregator;
pub mod log_classifier;
pub mod time_series;
pub mod validator;

pub use aggregator::{average_production, production_series, top_days};
pub use log_classifier::{classify_line, LogClassifier};
pub use time_series::TimeSeriesAnalyzer;
pub use validator::validate_records;

use thiserror::Error;

/// Errors from invalid analysis parameters.
///
/// Bad input data is never an error here; it is either reported
/// (`ValidationError`) or skipped.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Parse a raw production field. Surrounding whitespace is ignored.
pub(crate) fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}
