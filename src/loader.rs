//! Data ingestion from CSV production exports and plain-text log files
//!
//! This is the only place that touches the filesystem. A missing or
//! unreadable source is reported here, before any analysis data exists.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::ProductionRecord;

/// Errors while reading an input source
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Read production records from a CSV file with a header row.
///
/// Expected CSV format:
/// date,production,well_id
pub fn read_production_csv(path: &Path) -> Result<Vec<ProductionRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_production_csv(file).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        count = records.len(),
        path = %path.display(),
        "Loaded production records from CSV"
    );
    Ok(records)
}

/// Parse production records from any CSV source.
///
/// Fields are keyed by the header row. A short row simply lacks its
/// trailing fields; extra cells beyond the header are ignored. Cells that are
/// not valid UTF-8 are decoded lossily, so every data row yields exactly one
/// record and row positions match the source.
///
/// # Errors
/// Fails if the underlying reader fails.
pub fn parse_production_csv<R: Read>(reader: R) -> Result<Vec<ProductionRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.byte_headers()?.iter().map(decode_cell).collect();
    let mut records = Vec::new();

    for (idx, result) in reader.byte_records().enumerate() {
        let row = result?;
        if std::str::from_utf8(row.as_slice()).is_err() {
            // +2: byte_records() starts after the header, lines are 1-based
            tracing::warn!(line = idx + 2, "CSV row is not valid UTF-8, decoding lossily");
        }
        records.push(
            headers
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(decode_cell))
                .collect::<ProductionRecord>(),
        );
    }

    Ok(records)
}

fn decode_cell(cell: &[u8]) -> String {
    String::from_utf8_lossy(cell).into_owned()
}

/// Read a log file into lines, preserving order.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = split_log_lines(&contents);
    tracing::info!(count = lines.len(), path = %path.display(), "Loaded log lines");
    Ok(lines)
}

/// Split on `\n`, `\r\n` or a lone `\r`; a trailing terminator does not
/// start an extra empty line.
fn split_log_lines(contents: &str) -> Vec<String> {
    let normalized = contents.replace("\r\n", "\n");
    let mut lines: Vec<String> = normalized
        .split(&['\n', '\r'][..])
        .map(str::to_string)
        .collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}
