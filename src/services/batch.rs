//! Batch reconciliation over a detector table.

use crate::error::AppError;
use crate::models::{AppConfig, ErrorPolicy, OutputFormat};
use crate::services::table;
use std::io::Write;
use std::path::Path;
use tone_scale::{ReconciledRecord, RecordFailure, ToneReconciler, ToneRecord};

/// Outcome of one batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Reconciled rows, in input order
    pub records: Vec<ReconciledRecord>,
    /// Records that failed, in input order
    pub failures: Vec<RecordFailure>,
    /// Input records looked at (successes + failures)
    pub processed: usize,
    /// Set when the abort policy stopped the batch early
    pub aborted: bool,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failure that stopped an aborted batch
    pub fn abort_cause(&self) -> Option<&RecordFailure> {
        if self.aborted {
            self.failures.last()
        } else {
            None
        }
    }
}

/// Runs a [`ToneReconciler`] over many records with a failure policy
pub struct BatchService {
    reconciler: ToneReconciler,
    policy: ErrorPolicy,
}

impl BatchService {
    pub fn new(reconciler: ToneReconciler, policy: ErrorPolicy) -> Self {
        Self { reconciler, policy }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self::new(config.build_reconciler()?, config.on_error))
    }

    pub fn reconciler(&self) -> &ToneReconciler {
        &self.reconciler
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Reconcile records in order, applying the failure policy
    pub fn run<I>(&self, records: I) -> BatchReport
    where
        I: IntoIterator<Item = ToneRecord>,
    {
        let mut report = BatchReport::default();

        for result in self.reconciler.reconcile_all(records) {
            report.processed += 1;
            match result {
                Ok(row) => {
                    tracing::debug!(
                        photo = %row.photo_id,
                        hex = %row.hex_color,
                        von_luschan = row.von_luschan_index,
                        fitzpatrick = row.fitzpatrick_type,
                        "Reconciled"
                    );
                    report.records.push(row);
                }
                Err(failure) => {
                    tracing::warn!(
                        photo = %failure.photo_id,
                        error = %failure.error,
                        "Failed to reconcile record"
                    );
                    report.failures.push(failure);
                    if self.policy == ErrorPolicy::Abort {
                        report.aborted = true;
                        break;
                    }
                }
            }
        }

        tracing::info!(
            processed = report.processed,
            reconciled = report.records.len(),
            failed = report.failures.len(),
            aborted = report.aborted,
            "Batch finished"
        );

        report
    }

    /// Read a detector CSV, reconcile it and write the result.
    ///
    /// Writes to `output`, or to `stdout` when no path is given. An aborted
    /// batch writes nothing and returns the failing record as an error.
    pub fn run_file(
        &self,
        input: &Path,
        output: Option<&Path>,
        format: OutputFormat,
    ) -> Result<BatchReport, AppError> {
        let records = table::read_tone_records_from_path(input)?;
        tracing::info!(input = %input.display(), rows = records.len(), "Loaded detector table");

        let mut report = self.run(records);
        if report.aborted {
            if let Some(failure) = report.failures.pop() {
                return Err(AppError::Record(failure));
            }
        }

        match output {
            Some(path) => {
                table::write_reconciled_to_path(path, &report.records, format)?;
                tracing::info!(output = %path.display(), %format, "Wrote reconciled table");
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                table::write_reconciled(&mut handle, &report.records, format)?;
                handle.flush()?;
            }
        }

        Ok(report)
    }
}
