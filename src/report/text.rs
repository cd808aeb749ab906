//! Plain-text report layouts for management review.
//!
//! Renderers are pure: the generation time is passed in, so the same
//! summary and timestamp always produce the same text.

use chrono::NaiveDateTime;

use crate::config::defaults::{REPORT_BANNER_WIDTH, REPORT_RULE_WIDTH};
use crate::config::ReportConfig;

use super::{LogSummary, ProductionSummary, SeriesAnalysis};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn header(title: &str, generated: NaiveDateTime) -> Vec<String> {
    let banner = "=".repeat(REPORT_BANNER_WIDTH);
    vec![
        banner.clone(),
        title.to_string(),
        banner,
        format!("Generated: {}", generated.format(TIMESTAMP_FORMAT)),
        String::new(),
    ]
}

fn format_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn series_lines(series: &SeriesAnalysis, units: &str) -> Vec<String> {
    let mut lines = Vec::new();

    match &series.summary {
        Some(s) => {
            lines.push(format!("Samples: {}", s.count));
            lines.push(format!("Mean: {:.2} {units}", s.mean));
            lines.push(format!("Std Dev: {:.2} {units}", s.std_dev));
            lines.push(format!("Range: {:.2} - {:.2} {units}", s.min, s.max));
        }
        None => lines.push("Samples: 0".to_string()),
    }

    match series.change_percent {
        Some(change) => lines.push(format!("Trend: {} ({change:+.1}%)", series.trend)),
        None => lines.push(format!("Trend: {}", series.trend)),
    }

    if series.anomalies.is_empty() {
        lines.push(format!(
            "Anomalies (z > {:.1}): none",
            series.anomaly_threshold
        ));
    } else {
        lines.push(format!(
            "Anomalies (z > {:.1}): {} at index {}",
            series.anomaly_threshold,
            series.anomalies.len(),
            format_indices(&series.anomalies)
        ));
    }

    let averages = series
        .moving_average
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!(
        "Moving Average ({}): [{}]",
        series.moving_average_window, averages
    ));

    lines
}

/// Production data report: average, top days, trend and data quality.
pub fn production_report(
    summary: &ProductionSummary,
    generated: NaiveDateTime,
    config: &ReportConfig,
) -> String {
    let units = config.units.as_str();
    let mut report = header("PRODUCTION DATA ANALYSIS REPORT", generated);

    report.push(format!(
        "Average Daily Production: {:.2} {units}",
        summary.average_production
    ));
    report.push(String::new());

    report.push(format!("Top {} Production Days:", summary.top_n));
    report.push("-".repeat(REPORT_RULE_WIDTH));
    for (i, day) in summary.top_days.iter().enumerate() {
        report.push(format!("{}. {}: {:.2} {units}", i + 1, day.date, day.production));
    }

    report.push(String::new());
    report.push("Production Trend:".to_string());
    report.push("-".repeat(REPORT_RULE_WIDTH));
    report.extend(series_lines(&summary.series, units));

    report.push(String::new());
    report.push(format!(
        "Data Quality: {} errors found",
        summary.validation_errors.len()
    ));
    for err in summary.validation_errors.iter().take(config.max_listed_errors) {
        report.push(format!("  - Row {}: {}", err.row, err.kind.description()));
    }
    let hidden = summary
        .validation_errors
        .len()
        .saturating_sub(config.max_listed_errors);
    if hidden > 0 {
        report.push(format!("  ... and {hidden} more"));
    }

    report.push("=".repeat(REPORT_BANNER_WIDTH));
    report.join("\n")
}

/// System log report: severity counts, most recent errors, pattern matches.
pub fn log_report(summary: &LogSummary, generated: NaiveDateTime, config: &ReportConfig) -> String {
    let mut report = header("SYSTEM LOG ANALYSIS REPORT", generated);

    report.push("Log Summary:".to_string());
    for (severity, count) in summary.counts.iter() {
        report.push(format!("  {severity}: {count} entries"));
    }

    report.push(String::new());
    report.push(format!("Total Errors: {}", summary.errors.len()));
    // Most recent errors are the most useful, show the tail
    let skip = summary.errors.len().saturating_sub(config.max_listed_errors);
    for err in &summary.errors[skip..] {
        let clipped: String = err.chars().take(config.max_error_line_chars).collect();
        report.push(format!("  - {clipped}..."));
    }

    if let Some(search) = &summary.search {
        report.push(String::new());
        report.push(format!(
            "Pattern '{}': {} matches",
            search.pattern,
            search.matches.len()
        ));
        for m in &search.matches {
            report.push(format!("  Line {}: {}", m.line_number, m.line));
        }
    }

    report.push("=".repeat(REPORT_BANNER_WIDTH));
    report.join("\n")
}

/// Standalone time-series report.
pub fn series_report(
    analysis: &SeriesAnalysis,
    generated: NaiveDateTime,
    config: &ReportConfig,
) -> String {
    let mut report = header("TIME SERIES ANALYSIS REPORT", generated);
    report.extend(series_lines(analysis, config.units.as_str()));
    report.push("=".repeat(REPORT_BANNER_WIDTH));
    report.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::types::ProductionRecord;
    use chrono::NaiveDate;

    fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 6)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    fn production() -> ProductionSummary {
        let records: Vec<ProductionRecord> = [
            ("2024-01-01", "1500.5"),
            ("2024-01-02", "1600.2"),
            ("2024-01-03", "-100"),
            ("2024-01-04", "1550.8"),
            ("2024-01-05", "invalid"),
        ]
        .into_iter()
        .map(|(d, p)| {
            ProductionRecord::new()
                .with_field("date", d)
                .with_field("production", p)
                .with_field("well_id", "WELL-001")
        })
        .collect();
        ProductionSummary::build(&records, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_production_report_layout() {
        let text = production_report(&production(), generated(), &ReportConfig::default());

        assert!(text.starts_with(&"=".repeat(60)));
        assert!(text.contains("PRODUCTION DATA ANALYSIS REPORT"));
        assert!(text.contains("Generated: 2024-01-06 08:30:00"));
        assert!(text.contains("Average Daily Production: 1137.88 barrels"));
        assert!(text.contains("1. 2024-01-02: 1600.20 barrels"));
        assert!(text.contains("Data Quality: 2 errors found"));
        assert!(text.contains("  - Row 3: Negative production value"));
        assert!(text.contains("  - Row 5: Invalid production value"));
        assert!(text.ends_with(&"=".repeat(60)));
    }

    #[test]
    fn test_production_report_elides_extra_errors() {
        let config = ReportConfig {
            max_listed_errors: 1,
            ..ReportConfig::default()
        };
        let text = production_report(&production(), generated(), &config);
        assert!(text.contains("Row 3"));
        assert!(!text.contains("Row 5"));
        assert!(text.contains("... and 1 more"));
    }

    #[test]
    fn test_log_report_truncates_and_tails() {
        let long = format!("ERROR {}", "x".repeat(200));
        let lines: Vec<String> = vec![
            "INFO start".to_string(),
            "ERROR first".to_string(),
            long,
            "WARNING hot".to_string(),
        ];
        let summary = LogSummary::build(&lines, Some("hot")).unwrap();
        let config = ReportConfig {
            max_listed_errors: 1,
            ..ReportConfig::default()
        };
        let text = log_report(&summary, generated(), &config);

        assert!(text.contains("SYSTEM LOG ANALYSIS REPORT"));
        assert!(text.contains("  ERROR: 2 entries"));
        assert!(text.contains("  WARNING: 1 entries"));
        assert!(text.contains("Total Errors: 2"));
        assert!(!text.contains("ERROR first"));
        assert!(text.contains(&format!("  - ERROR {}...", "x".repeat(74))));
        assert!(text.contains("Pattern 'hot': 1 matches"));
        assert!(text.contains("  Line 4: WARNING hot"));
    }

    #[test]
    fn test_series_report() {
        let analysis = SeriesAnalysis::build(
            vec![100.0, 105.0, 103.0, 500.0, 106.0, 108.0, 110.0],
            &AnalysisConfig {
                moving_average_window: 3,
                ..AnalysisConfig::default()
            },
        )
        .unwrap();
        let text = series_report(&analysis, generated(), &ReportConfig::default());

        assert!(text.contains("TIME SERIES ANALYSIS REPORT"));
        assert!(text.contains("Samples: 7"));
        assert!(text.contains("Anomalies (z > 2.0): 1 at index 3"));
        assert!(text.contains("Moving Average (3): [102.67, 236.00"));
    }

    #[test]
    fn test_empty_series_report() {
        let analysis = SeriesAnalysis::build(Vec::new(), &AnalysisConfig::default()).unwrap();
        let text = series_report(&analysis, generated(), &ReportConfig::default());
        assert!(text.contains("Samples: 0"));
        assert!(text.contains("Trend: Insufficient data"));
        assert!(text.contains("Anomalies (z > 2.0): none"));
    }
}
