//! Record-level reconciliation
//!
//! [`ToneReconciler`] turns one [`ToneRecord`] into one [`ReconciledRecord`]:
//! decode, weight by confidence, classify, restrict the scale, match.

mod blend;
mod reconciler;
mod record;

pub use blend::equation_color;
pub use reconciler::{QueryMode, SearchScope, ToneMatch, ToneReconciler};
pub use record::{ReconciledRecord, RecordFailure, ToneRecord};
