//! CSV export for generated energy series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::series::EnergySample;

/// Column header for CSV series export.
pub const HEADER: &[&str] = &[
    "timestamp",
    "generation_kwh",
    "consumption_kwh",
    "surplus_kwh",
    "price_per_kwh",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors from writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot create \"{path}\": {source}")]
    Create { path: String, source: io::Error },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Exports a series to a CSV file at the given path.
///
/// Writes a header row followed by one row per sample. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `ExportError` if file creation or writing fails.
pub fn export_csv(samples: &[EnergySample], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.display().to_string(),
        source,
    })?;
    write_csv(samples, io::BufWriter::new(file))
}

/// Writes a series as CSV to any writer.
///
/// # Errors
///
/// Returns an `ExportError` if writing fails.
pub fn write_csv(samples: &[EnergySample], writer: impl Write) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;
    for s in samples {
        wtr.write_record(&[
            s.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            format!("{:.2}", s.generation_kwh),
            format!("{:.2}", s.consumption_kwh),
            format!("{:.2}", s.surplus_kwh),
            format!("{:.2}", s.price_per_kwh),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn make_sample(h: u32) -> EnergySample {
        let base = NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid timestamp");
        EnergySample {
            timestamp: base + TimeDelta::hours(i64::from(h)),
            generation_kwh: 6.4,
            consumption_kwh: 3.1,
            surplus_kwh: 3.3,
            price_per_kwh: 4.12,
        }
    }

    #[test]
    fn header_and_first_row() {
        let mut buf = Vec::new();
        write_csv(&[make_sample(12)], &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let mut lines = output.as_deref().unwrap_or("").lines();
        assert_eq!(
            lines.next(),
            Some("timestamp,generation_kwh,consumption_kwh,surplus_kwh,price_per_kwh")
        );
        assert_eq!(lines.next(), Some("2024-06-01T12:00:00,6.40,3.10,3.30,4.12"));
    }

    #[test]
    fn row_count_matches_sample_count() {
        let samples: Vec<EnergySample> = (0..24).map(make_sample).collect();
        let mut buf = Vec::new();
        write_csv(&samples, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        // 1 header + 24 data rows
        assert_eq!(output.as_deref().unwrap_or("").lines().count(), 25);
    }

    #[test]
    fn numeric_columns_parse_back() {
        let samples: Vec<EnergySample> = (0..3).map(make_sample).collect();
        let mut buf = Vec::new();
        write_csv(&samples, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let mut rows = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            let rec = rec.unwrap_or_default();
            for i in 1..5 {
                assert!(rec[i].parse::<f64>().is_ok(), "column {i} should parse as f64");
            }
            rows += 1;
        }
        assert_eq!(rows, 3);
    }

    #[test]
    fn missing_directory_reports_path() {
        let path = Path::new("/nonexistent-dir/series.csv");
        let err = export_csv(&[make_sample(0)], path);
        assert!(matches!(err, Err(ExportError::Create { .. })));
    }
}
