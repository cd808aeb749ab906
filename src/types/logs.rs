//! Log severity buckets and pattern search results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Log criticality derived from keyword presence.
///
/// Declaration order is the classification priority and also the `Ord`
/// used by [`LogSeverityCounts`] for iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Keyword searched for (case-insensitively) in a log line.
    pub fn keyword(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Line counts per severity.
///
/// Only severities that were actually observed are present; an absent key
/// means zero matching lines, and callers must not expect zero-filled
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogSeverityCounts {
    counts: BTreeMap<Severity, usize>,
}

impl LogSeverityCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more line for `severity`.
    pub fn increment(&mut self, severity: Severity) {
        *self.counts.entry(severity).or_insert(0) += 1;
    }

    /// Count for `severity`, or `None` if it never occurred.
    pub fn get(&self, severity: Severity) -> Option<usize> {
        self.counts.get(&severity).copied()
    }

    /// Observed severities in priority order (ERROR, WARNING, INFO).
    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        self.counts.iter().map(|(s, c)| (*s, *c))
    }

    /// Number of distinct severities observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total classified lines.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// A line that matched a search pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    /// 1-based line number in the original log
    pub line_number: usize,
    /// Matched line, whitespace-trimmed
    pub line: String,
}
