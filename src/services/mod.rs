pub mod batch;
pub mod table;

pub use batch::{BatchReport, BatchService};
pub use table::{
    read_tone_records, read_tone_records_from_path, write_reconciled, write_reconciled_to_path,
    OUTPUT_COLUMNS,
};
