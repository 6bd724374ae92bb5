//! Reading tone detector tables and writing reconciled tables.

use crate::error::AppError;
use crate::models::OutputFormat;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tone_scale::{ReconciledRecord, ToneRecord};

/// Column order of the reconciled table
pub const OUTPUT_COLUMNS: [&str; 4] = [
    "photo",
    "skin_tone_hex",
    "von_lus_index",
    "fitzpatrick_index",
];

/// Read detector rows from CSV.
///
/// Columns are matched by header name; columns the reconciler does not use
/// are ignored. A row that does not deserialize fails the whole read.
pub fn read_tone_records<R: Read>(reader: R) -> Result<Vec<ToneRecord>, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<ToneRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = records.len(), "Read detector table");
    Ok(records)
}

/// Read detector rows from a CSV file
pub fn read_tone_records_from_path(path: &Path) -> Result<Vec<ToneRecord>, AppError> {
    let file = File::open(path)?;
    read_tone_records(file)
}

/// Write reconciled rows in the given format.
///
/// CSV output always carries the header row, even with no records.
pub fn write_reconciled<W: Write>(
    mut writer: W,
    records: &[ReconciledRecord],
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Csv => {
            let mut csv_writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer);
            csv_writer.write_record(OUTPUT_COLUMNS)?;
            for record in records {
                csv_writer.serialize(record)?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Write reconciled rows to a file, replacing it if it exists
pub fn write_reconciled_to_path(
    path: &Path,
    records: &[ReconciledRecord],
    format: OutputFormat,
) -> Result<(), AppError> {
    let file = File::create(path)?;
    write_reconciled(file, records, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DETECTOR_CSV: &str = "\
file,image type,face id,dominant 1,percent 1,dominant 2,percent 2,skin tone,tone label,accuracy(0-100)
faces/a.jpg,color,1,#352A22,0.62,#5E4A3C,0.38,#373028,CA,88.5
faces/b.jpg,color,1,,,,,#FBF2F3,CK,92
";

    #[test]
    fn test_read_detector_columns() {
        let records = read_tone_records(DETECTOR_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].photo_id, "faces/a.jpg");
        assert_eq!(records[0].hex_color, "#373028");
        assert_eq!(records[0].confidence_percent, 88.5);
        assert_eq!(
            records[0].dominant_samples(),
            vec![("#352A22", 0.62), ("#5E4A3C", 0.38)]
        );

        assert_eq!(records[1].hex_color, "#FBF2F3");
        assert!(records[1].dominant_samples().is_empty());
    }

    #[test]
    fn test_read_minimal_columns() {
        let csv = "file,skin tone,accuracy(0-100)\np1,#373028,100\n";
        let records = read_tone_records(csv.as_bytes()).unwrap();
        assert_eq!(records, vec![ToneRecord::new("p1", "#373028", 100.0)]);
    }

    #[test]
    fn test_read_missing_required_column() {
        let csv = "file,skin tone\np1,#373028\n";
        assert!(matches!(
            read_tone_records(csv.as_bytes()),
            Err(AppError::Csv(_))
        ));
    }

    #[test]
    fn test_read_bad_accuracy() {
        let csv = "file,skin tone,accuracy(0-100)\np1,#373028,high\n";
        assert!(matches!(
            read_tone_records(csv.as_bytes()),
            Err(AppError::Csv(_))
        ));
    }

    fn sample_rows() -> Vec<ReconciledRecord> {
        vec![
            ReconciledRecord {
                photo_id: "p1".to_string(),
                hex_color: "#373028".to_string(),
                von_luschan_index: 36,
                fitzpatrick_type: 6,
            },
            ReconciledRecord {
                photo_id: "p2".to_string(),
                hex_color: "#fbf2f3".to_string(),
                von_luschan_index: 7,
                fitzpatrick_type: 1,
            },
        ]
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_reconciled(&mut out, &sample_rows(), OutputFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "photo,skin_tone_hex,von_lus_index,fitzpatrick_index\n\
             p1,#373028,36,6\n\
             p2,#fbf2f3,7,1\n"
        );
    }

    #[test]
    fn test_write_csv_empty_keeps_header() {
        let mut out = Vec::new();
        write_reconciled(&mut out, &[], OutputFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "photo,skin_tone_hex,von_lus_index,fitzpatrick_index\n"
        );
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_reconciled(&mut out, &sample_rows(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["photo"], "p1");
        assert_eq!(value[0]["von_lus_index"], 36);
        assert_eq!(value[1]["fitzpatrick_index"], 1);
        assert_eq!(value[1]["skin_tone_hex"], "#fbf2f3");
    }
}
