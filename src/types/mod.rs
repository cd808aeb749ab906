//! Shared data structures for production and log analysis
//!
//! - ProductionRecord, ValidationError, RankedDay (tabular production data)
//! - Severity, LogSeverityCounts, PatternMatch (system logs)
//! - Trend, SeriesSummary (numeric series)

mod logs;
mod production;
mod series;

pub use logs::*;
pub use production::*;
pub use series::*;
