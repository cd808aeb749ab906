//! Report assembly and rendering
//!
//! Summaries run the analytical core once and hold every result a report
//! needs. They serialize to JSON as-is, and the `text` renderers turn them
//! into fixed-layout plain-text reports.

mod text;

pub use text::{log_report, production_report, series_report};

use serde::Serialize;

use crate::analysis::{self, AnalysisError, LogClassifier, TimeSeriesAnalyzer};
use crate::config::AnalysisConfig;
use crate::types::{
    LogSeverityCounts, PatternMatch, ProductionRecord, RankedDay, SeriesSummary, Trend,
    ValidationError,
};

// ============================================================================
// Series
// ============================================================================

/// Time-series results for one numeric series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesAnalysis {
    pub summary: Option<SeriesSummary>,
    pub trend: Trend,
    /// Half-over-half mean change (%), absent with fewer than two points
    pub change_percent: Option<f64>,
    pub anomaly_threshold: f64,
    /// Indices into the analyzed series
    pub anomalies: Vec<usize>,
    pub moving_average_window: usize,
    pub moving_average: Vec<f64>,
}

impl SeriesAnalysis {
    /// # Errors
    /// `InvalidArgument` if the configured moving-average window is 0.
    pub fn build(values: Vec<f64>, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let analyzer = TimeSeriesAnalyzer::new(values);
        Ok(Self {
            summary: analyzer.summary(),
            trend: analyzer.classify_trend_with(config.trend_threshold_percent),
            change_percent: analyzer.half_change_percent(),
            anomaly_threshold: config.anomaly_threshold,
            anomalies: analyzer.detect_anomalies(config.anomaly_threshold),
            moving_average_window: config.moving_average_window,
            moving_average: analyzer.moving_average(config.moving_average_window)?,
        })
    }
}

// ============================================================================
// Production
// ============================================================================

/// Everything the production report shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionSummary {
    pub record_count: usize,
    pub average_production: f64,
    pub top_n: usize,
    pub top_days: Vec<RankedDay>,
    pub validation_errors: Vec<ValidationError>,
    /// Analysis of the production series (unparsable values dropped)
    pub series: SeriesAnalysis,
}

impl ProductionSummary {
    /// # Errors
    /// Propagates invalid analysis parameters from [`SeriesAnalysis::build`].
    pub fn build(
        records: &[ProductionRecord],
        config: &AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        let top_n = i64::try_from(config.top_n).unwrap_or(i64::MAX);
        let summary = Self {
            record_count: records.len(),
            average_production: analysis::average_production(records),
            top_n: config.top_n,
            top_days: analysis::top_days(records, top_n),
            validation_errors: analysis::validate_records(records),
            series: SeriesAnalysis::build(analysis::production_series(records), config)?,
        };

        tracing::info!(
            records = summary.record_count,
            errors = summary.validation_errors.len(),
            trend = %summary.series.trend,
            "Production analysis complete"
        );
        Ok(summary)
    }
}

// ============================================================================
// Logs
// ============================================================================

/// Result of a pattern search over a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternSearch {
    pub pattern: String,
    pub matches: Vec<PatternMatch>,
}

/// Everything the log report shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    pub line_count: usize,
    pub counts: LogSeverityCounts,
    pub errors: Vec<String>,
    pub search: Option<PatternSearch>,
}

impl LogSummary {
    /// # Errors
    /// `AnalysisError::Pattern` if `pattern` is not a valid regex.
    pub fn build(lines: &[String], pattern: Option<&str>) -> Result<Self, AnalysisError> {
        let classifier = LogClassifier::new(lines.iter().map(String::as_str));

        let search = match pattern {
            Some(p) => Some(PatternSearch {
                pattern: p.to_string(),
                matches: classifier.find_pattern(p)?,
            }),
            None => None,
        };

        let summary = Self {
            line_count: classifier.len(),
            counts: classifier.count_by_severity(),
            errors: classifier.extract_errors(),
            search,
        };

        tracing::info!(
            lines = summary.line_count,
            errors = summary.errors.len(),
            "Log analysis complete"
        );
        Ok(summary)
    }
}
