//! CSV output for metric records.
//!
//! The header is always written, even for an empty collection, and rows follow
//! the input order. Floats use the `csv` crate's shortest round-trip formatting,
//! so infinity is written as `inf` and parses back unchanged.

use analytics::{FIELD_NAMES, MetricRecord};
use std::path::Path;

pub mod error;

pub use error::ReportError;

/// Renders the header plus one row per record.
pub fn render_csv(records: &[MetricRecord]) -> Result<String, ReportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    wtr.write_record(FIELD_NAMES)?;
    for record in records {
        wtr.serialize(record)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ReportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(data)?)
}

/// Writes the records to `path`, replacing any existing file.
///
/// The whole document is rendered before the file is opened, so a rendering
/// failure never leaves a truncated file behind.
pub fn write_csv(path: &Path, records: &[MetricRecord]) -> Result<(), ReportError> {
    let contents = render_csv(records)?;
    std::fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), rows = records.len(), "Wrote metrics report");
    Ok(())
}

/// Parses a metrics CSV produced by [`render_csv`].
pub fn parse_csv(contents: &str) -> Result<Vec<MetricRecord>, ReportError> {
    let mut rdr = csv::Reader::from_reader(contents.as_bytes());

    let headers = rdr.headers()?;
    if !headers.iter().eq(FIELD_NAMES.iter().copied()) {
        tracing::warn!(columns = headers.len(), "Rejecting CSV with a foreign header");
        return Err(ReportError::Header {
            expected: FIELD_NAMES.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    rdr.deserialize::<MetricRecord>()
        .map(|row| row.map_err(ReportError::from))
        .collect()
}

pub fn read_csv(path: &Path) -> Result<Vec<MetricRecord>, ReportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_csv(&contents)?;

    tracing::debug!(path = %path.display(), rows = records.len(), "Read metrics report");
    Ok(records)
}
