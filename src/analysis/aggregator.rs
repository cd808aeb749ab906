//! Production Aggregator
//!
//! Flattens records into a numeric series and computes the average and the
//! top-N production days over it.
//!
//! Parsing rule shared by every function here: a record with no
//! `production` field counts as `0`, and a value that fails to parse is
//! skipped. The validator treats a missing field differently (skip, no
//! finding); both behaviors are intentional.

use statrs::statistics::Statistics;

use crate::types::{ProductionRecord, RankedDay, UNKNOWN_DATE};

use super::parse_value;

/// Value assumed for a record with no `production` field.
const MISSING_PRODUCTION: &str = "0";

/// Records paired with their parsed production, in input order.
fn parsed_records(
    records: &[ProductionRecord],
) -> impl Iterator<Item = (&ProductionRecord, f64)> {
    records.iter().enumerate().filter_map(|(i, record)| {
        let raw = record.production().unwrap_or(MISSING_PRODUCTION);
        match parse_value(raw) {
            Some(value) => Some((record, value)),
            None => {
                tracing::debug!(row = i + 1, value = %raw, "Skipping unparsable production value");
                None
            }
        }
    })
}

/// Production values in record order, unparsable entries dropped.
///
/// Indices into the returned series are positions in this series, not
/// record row numbers.
pub fn production_series(records: &[ProductionRecord]) -> Vec<f64> {
    parsed_records(records).map(|(_, value)| value).collect()
}

/// Mean daily production.
///
/// Returns exactly `0.0` when no record parses (including empty input).
pub fn average_production(records: &[ProductionRecord]) -> f64 {
    let series = production_series(records);
    if series.is_empty() {
        return 0.0;
    }
    series.iter().mean()
}

/// The `n` highest-production days, highest first.
///
/// Equal production values keep their input order. `n <= 0` yields an
/// empty list.
pub fn top_days(records: &[ProductionRecord], n: i64) -> Vec<RankedDay> {
    let Ok(limit) = usize::try_from(n) else {
        return Vec::new();
    };
    if limit == 0 {
        return Vec::new();
    }

    let mut days: Vec<RankedDay> = parsed_records(records)
        .map(|(record, production)| RankedDay {
            date: record.date().unwrap_or(UNKNOWN_DATE).to_string(),
            production,
        })
        .collect();

    // sort_by is stable, so ties stay in input order
    days.sort_by(|a, b| b.production.total_cmp(&a.production));
    days.truncate(limit);
    days
}
