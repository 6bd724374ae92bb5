//! Anchor palette and Fitzpatrick classification
//!
//! This module provides the detector's canonical tone palette, the
//! exact-match Fitzpatrick classifier built on it, and the error types for
//! color decoding and palette validation.

mod anchors;
mod error;
mod fitzpatrick;

pub use anchors::{AnchorPalette, DEFAULT_TONE_PALETTE, MIN_ANCHORS};
pub use error::{PaletteError, ParseColorError};
pub use fitzpatrick::{classify, FitzpatrickType};
