//! Custom assertion helpers for tests.

use std::path::Path;
use tone_scale::ReconciledRecord;

/// Read a reconciled CSV back into records, checking the header
pub fn read_reconciled_csv(path: &Path) -> Vec<ReconciledRecord> {
    let mut reader = csv::Reader::from_path(path).expect("Output CSV should exist");
    let headers = reader.headers().expect("Output should have headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["photo", "skin_tone_hex", "von_lus_index", "fitzpatrick_index"],
        "Output columns are a contract"
    );
    reader
        .deserialize()
        .collect::<Result<Vec<ReconciledRecord>, _>>()
        .expect("Output rows should deserialize")
}

/// Assert a record's Fitzpatrick type and that its von Luschan index lies
/// inside that type's range
pub fn assert_consistent(record: &ReconciledRecord, fitzpatrick: u8) {
    assert_eq!(
        record.fitzpatrick_type, fitzpatrick,
        "Unexpected Fitzpatrick type for {}",
        record.photo_id
    );
    let range = match fitzpatrick {
        1 => 1..=7,
        2 => 8..=14,
        3 => 15..=21,
        4 => 22..=28,
        5 => 29..=35,
        6 => 36..=36,
        other => panic!("Invalid Fitzpatrick type {other}"),
    };
    assert!(
        range.contains(&record.von_luschan_index),
        "von Luschan index {} outside {:?} for {}",
        record.von_luschan_index,
        range,
        record.photo_id
    );
}
