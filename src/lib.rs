//! Energy Toolkit: Production Data & System Log Analysis
//!
//! Quick quality checks and trend snapshots over CSV production exports and
//! plain-text log files.
//!
//! ## Architecture
//!
//! - **Analysis**: Pure computations (validation, aggregation, time series, log classification)
//! - **Loader**: CSV and log file ingestion, the only module doing I/O
//! - **Report**: Summaries of analysis results and plain-text rendering
//! - **Config**: TOML-tunable windows, thresholds and report layout

pub mod analysis;
pub mod config;
pub mod loader;
pub mod report;
pub mod types;

// Re-export configuration
pub use config::ToolkitConfig;

// Re-export commonly used types
pub use types::{
    LogSeverityCounts, PatternMatch, ProductionRecord, RankedDay, SeriesSummary, Severity, Trend,
    ValidationError, ValidationErrorKind,
};

// Re-export analysis entry points
pub use analysis::{
    average_production, production_series, top_days, validate_records, AnalysisError,
    LogClassifier, TimeSeriesAnalyzer,
};

// Re-export loading and reporting
pub use loader::{read_log_lines, read_production_csv, LoadError};
pub use report::{LogSummary, ProductionSummary, SeriesAnalysis};
