//! Record Validator
//!
//! Checks the `production` field of each record and reports, in row order:
//! - Malformed values (not parseable as a number)
//! - Negative values
//!
//! A record with no `production` field at all is skipped without a finding.
//! Note this differs from the aggregator, which treats a missing field as 0.

use crate::types::{ProductionRecord, ValidationError, ValidationErrorKind};

use super::parse_value;

/// Validate every record, returning one finding per offending record.
///
/// Rows are numbered from 1. Never fails: bad data becomes report data.
pub fn validate_records(records: &[ProductionRecord]) -> Vec<ValidationError> {
    let errors: Vec<ValidationError> = records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| check_record(i + 1, record))
        .collect();

    tracing::debug!(
        records = records.len(),
        errors = errors.len(),
        "Validated production records"
    );
    errors
}

fn check_record(row: usize, record: &ProductionRecord) -> Option<ValidationError> {
    let raw = record.production()?;
    let kind = match parse_value(raw) {
        Some(value) if value < 0.0 => ValidationErrorKind::NegativeValue(value),
        Some(_) => return None,
        None => ValidationErrorKind::MalformedValue(raw.to_string()),
    };
    Some(ValidationError { row, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(production: &str) -> ProductionRecord {
        ProductionRecord::new().with_field("production", production)
    }

    #[test]
    fn test_reports_negative_then_malformed_in_row_order() {
        let records = vec![
            record("-5"),
            record("abc"),
            record("10"),
            ProductionRecord::new(),
        ];

        let errors = validate_records(&records);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].row, 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeValue(-5.0));
        assert_eq!(errors[1].row, 2);
        assert_eq!(
            errors[1].kind,
            ValidationErrorKind::MalformedValue("abc".to_string())
        );
    }

    #[test]
    fn test_missing_production_is_not_an_error() {
        let records = vec![ProductionRecord::new().with_field("date", "2024-01-01")];
        assert!(validate_records(&records).is_empty());
    }

    #[test]
    fn test_empty_string_is_malformed() {
        let errors = validate_records(&[record("")]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].offending_value(), "");
    }

    #[test]
    fn test_zero_is_valid() {
        assert!(validate_records(&[record("0"), record("0.0")]).is_empty());
    }

    #[test]
    fn test_offending_value_keeps_raw_text() {
        let errors = validate_records(&[record("12..5")]);
        assert_eq!(errors[0].offending_value(), "12..5");
        assert_eq!(errors[0].kind.description(), "Invalid production value");
    }
}
