//! System-wide default constants.
//!
//! Centralises the tuning numbers used by the analysis and report layers.
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Aggregation
// ============================================================================

/// Number of days listed in a top-production ranking.
pub const DEFAULT_TOP_N: usize = 5;

// ============================================================================
// Time Series
// ============================================================================

/// Moving-average window (samples). 7 = one week of daily values.
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 7;

/// Z-score above which a point is flagged as anomalous.
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 2.0;

/// Half-over-half mean change (%) needed to call a trend.
pub const DEFAULT_TREND_THRESHOLD_PERCENT: f64 = 5.0;

// ============================================================================
// Reports
// ============================================================================

/// Validation errors / error lines listed in a report before eliding.
pub const DEFAULT_MAX_LISTED_ERRORS: usize = 5;

/// Characters of an error line shown in the log report.
pub const DEFAULT_MAX_ERROR_LINE_CHARS: usize = 80;

/// Volume unit label printed next to production figures.
pub const DEFAULT_PRODUCTION_UNITS: &str = "barrels";

/// Width of the `=` banner framing every report.
pub const REPORT_BANNER_WIDTH: usize = 60;

/// Width of the `-` rule under section headings.
pub const REPORT_RULE_WIDTH: usize = 40;
