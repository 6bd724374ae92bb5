//! tone-scale: skin tone reconciliation between the Fitzpatrick and von
//! Luschan scales
//!
//! A tone detector reports one canonical skin color per photo, as a hex
//! string with a confidence percentage. This crate maps that report onto:
//!
//! - the 6-level **Fitzpatrick** scale, by exact membership of the color in
//!   the detector's anchor palette, and
//! - the 36-level **von Luschan** scale, by nearest Euclidean RGB distance,
//!   searched only inside the rows the Fitzpatrick type allows.
//!
//! # Quick Start
//!
//! ```
//! use tone_scale::{ToneReconciler, ToneRecord};
//!
//! let reconciler = ToneReconciler::default();
//! let row = reconciler
//!     .reconcile(&ToneRecord::new("img_001.jpg", "#9D7A54", 87.0))
//!     .unwrap();
//!
//! assert_eq!(row.hex_color, "#9d7a54");
//! assert_eq!(row.fitzpatrick_type, 3);
//! assert!((15..=21).contains(&row.von_luschan_index));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! "#9D7A54", 87%
//!     |
//!     v
//! Rgb (157,122,84)  ----------------------> classify()  -> Fitzpatrick 3
//!     |                                         |
//!     | x 0.87                                  v
//!     v                                   rows 14..=20
//! WeightedRgb (136.6,106.1,73.1) ------> find_nearest() -> von Luschan type
//! ```
//!
//! Classification sees the unweighted color because the anchor lookup is an
//! exact match against the detector's own vocabulary. Only the nearest-tone
//! query is scaled by confidence. The scaled vector is not clamped and is
//! not a displayable color.
//!
//! # Tables
//!
//! [`ReferenceScale`] and [`AnchorPalette`] are immutable values. Build them
//! once (their `Default` impls give the standard tables) and hand them to a
//! [`ToneReconciler`]; nothing in this crate keeps global state.

pub mod color;
pub mod error;
pub mod palette;
pub mod reconcile;
pub mod scale;

#[cfg(test)]
mod domain_tests;

pub use color::{Rgb, WeightedRgb};
pub use error::ToneError;
pub use palette::{
    classify, AnchorPalette, FitzpatrickType, PaletteError, ParseColorError, DEFAULT_TONE_PALETTE,
};
pub use reconcile::{
    equation_color, QueryMode, ReconciledRecord, RecordFailure, SearchScope, ToneMatch,
    ToneReconciler, ToneRecord,
};
pub use scale::{find_nearest, ReferenceEntry, ReferenceScale, SCALE_LEN, VON_LUSCHAN};
