//! Production records and the data-quality / ranking outputs derived from them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column holding the day label.
pub const FIELD_DATE: &str = "date";
/// Column holding the daily production volume.
pub const FIELD_PRODUCTION: &str = "production";
/// Column holding the well identifier.
pub const FIELD_WELL_ID: &str = "well_id";

/// Label used when a ranked record has no `date` field.
pub const UNKNOWN_DATE: &str = "Unknown";

// ============================================================================
// Production Record
// ============================================================================

/// One row of operational output data, kept as raw strings.
///
/// Field presence is not guaranteed: a short CSV row or a hand-built record
/// may lack any of the expected columns. Numeric interpretation happens in
/// the analysis layer, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductionRecord {
    fields: BTreeMap<String, String>,
}

impl ProductionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw value of an arbitrary column.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn date(&self) -> Option<&str> {
        self.get(FIELD_DATE)
    }

    pub fn production(&self) -> Option<&str> {
        self.get(FIELD_PRODUCTION)
    }

    pub fn well_id(&self) -> Option<&str> {
        self.get(FIELD_WELL_ID)
    }

    /// Number of fields present on this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ProductionRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Validation Errors
// ============================================================================

/// What was wrong with a record's production value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ValidationErrorKind {
    /// Parsed successfully but below zero. Carries the parsed value.
    NegativeValue(f64),
    /// Could not be parsed as a number. Carries the raw string.
    MalformedValue(String),
}

impl ValidationErrorKind {
    /// Short description used in data-quality reports.
    pub fn description(&self) -> &'static str {
        match self {
            Self::NegativeValue(_) => "Negative production value",
            Self::MalformedValue(_) => "Invalid production value",
        }
    }
}

/// A data-quality finding for a single record.
///
/// This is report data, not a failure: validation never aborts analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based position of the record in the input sequence
    pub row: usize,
    #[serde(flatten)]
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    /// The offending value rendered as text (parsed float or raw input).
    pub fn offending_value(&self) -> String {
        match &self.kind {
            ValidationErrorKind::NegativeValue(v) => v.to_string(),
            ValidationErrorKind::MalformedValue(raw) => raw.clone(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Row {}: {} ({})",
            self.row,
            self.kind.description(),
            self.offending_value()
        )
    }
}

// ============================================================================
// Ranking
// ============================================================================

/// A day's production as it appears in a top-N listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDay {
    pub date: String,
    pub production: f64,
}
