//! Log Classifier
//!
//! Severity counting, error extraction and pattern search over plain-text
//! log lines. Matching is case-insensitive throughout.

use regex::RegexBuilder;

use crate::types::{LogSeverityCounts, PatternMatch, Severity};

use super::AnalysisError;

/// Severities in classification priority order. The first keyword found in
/// a line decides its bucket, so a line mentioning both ERROR and WARNING
/// counts only as ERROR.
const SEVERITY_PRIORITY: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

/// Classify one line, or `None` if it carries no severity keyword.
pub fn classify_line(line: &str) -> Option<Severity> {
    let upper = line.to_uppercase();
    SEVERITY_PRIORITY
        .into_iter()
        .find(|severity| upper.contains(severity.keyword()))
}

/// Analyzer over an ordered set of raw log lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogClassifier {
    lines: Vec<String>,
}

impl LogClassifier {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines per severity. Severities with no lines are absent from the result.
    pub fn count_by_severity(&self) -> LogSeverityCounts {
        let mut counts = LogSeverityCounts::new();
        for severity in self.lines.iter().filter_map(|line| classify_line(line)) {
            counts.increment(severity);
        }
        counts
    }

    /// Every line mentioning ERROR, trimmed, in original order.
    pub fn extract_errors(&self) -> Vec<String> {
        let keyword = Severity::Error.keyword();
        self.lines
            .iter()
            .filter(|line| line.to_uppercase().contains(keyword))
            .map(|line| line.trim().to_string())
            .collect()
    }

    /// Lines matching a case-insensitive regular expression, with 1-based
    /// line numbers.
    ///
    /// # Errors
    /// `AnalysisError::Pattern` if `pattern` is not a valid regex.
    pub fn find_pattern(&self, pattern: &str) -> Result<Vec<PatternMatch>, AnalysisError> {
        let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;

        let matches: Vec<PatternMatch> = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| re.is_match(line))
            .map(|(i, line)| PatternMatch {
                line_number: i + 1,
                line: line.trim().to_string(),
            })
            .collect();

        tracing::debug!(pattern = %pattern, matches = matches.len(), "Pattern search complete");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LogClassifier {
        LogClassifier::new([
            "2024-01-01 10:00:00 INFO a",
            "2024-01-01 10:05:00 ERROR b",
            "2024-01-01 10:10:00 WARNING c",
            "2024-01-01 10:15:00 ERROR d",
        ])
    }

    #[test]
    fn test_count_by_severity() {
        let counts = sample().count_by_severity();
        assert_eq!(counts.get(Severity::Error), Some(2));
        assert_eq!(counts.get(Severity::Warning), Some(1));
        assert_eq!(counts.get(Severity::Info), Some(1));
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_unobserved_severities_absent() {
        let counts = LogClassifier::new(["ERROR one", "plain line"]).count_by_severity();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(Severity::Warning), None);
        assert_eq!(counts.get(Severity::Info), None);
    }

    #[test]
    fn test_error_wins_over_warning() {
        assert_eq!(
            classify_line("WARNING: retry after error"),
            Some(Severity::Error)
        );
        assert_eq!(classify_line("info: warning suppressed"), Some(Severity::Warning));
        assert_eq!(classify_line("nothing to see"), None);
    }

    #[test]
    fn test_counts_iterate_in_priority_order() {
        let counts = LogClassifier::new(["info", "warning", "error"]).count_by_severity();
        let order: Vec<Severity> = counts.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec![Severity::Error, Severity::Warning, Severity::Info]);
    }

    #[test]
    fn test_extract_errors_trims() {
        let classifier = LogClassifier::new(["  Error: disk full \n", "ok", "fatal ERROR\t"]);
        assert_eq!(
            classifier.extract_errors(),
            vec!["Error: disk full".to_string(), "fatal ERROR".to_string()]
        );
        assert_eq!(sample().extract_errors().len(), 2);
    }

    #[test]
    fn test_find_pattern_reports_one_based_lines() {
        let matches = sample().find_pattern("error").unwrap();
        let lines: Vec<usize> = matches.iter().map(|m| m.line_number).collect();
        assert_eq!(lines, vec![2, 4]);
        assert_eq!(matches[0].line, "2024-01-01 10:05:00 ERROR b");
    }

    #[test]
    fn test_find_pattern_regex_syntax() {
        let matches = sample().find_pattern(r"10:(05|10)").unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].line_number, 3);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let classifier = sample();
        assert!(matches!(
            classifier.find_pattern("(unclosed"),
            Err(AnalysisError::Pattern(_))
        ));
        // Independent operations still work afterwards
        assert_eq!(classifier.count_by_severity().total(), 4);
    }

    #[test]
    fn test_empty_log() {
        let classifier = LogClassifier::default();
        assert!(classifier.count_by_severity().is_empty());
        assert!(classifier.extract_errors().is_empty());
        assert!(classifier.find_pattern("x").unwrap().is_empty());
    }
}
