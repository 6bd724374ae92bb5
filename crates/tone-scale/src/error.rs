//! Unified error type for tone reconciliation.
//!
//! Every variant is deterministic and scoped to the record being processed;
//! none of them should stop a batch on its own.

use thiserror::Error;

use crate::color::{Rgb, WeightedRgb};
use crate::palette::{PaletteError, ParseColorError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToneError {
    /// The hex color could not be decoded into three byte channels
    #[error("malformed color {input:?}: {source}")]
    MalformedColor {
        input: String,
        #[source]
        source: ParseColorError,
    },

    /// The color is not one of the anchor palette's canonical colors
    #[error("color {0} matches no Fitzpatrick anchor group")]
    UnclassifiableTone(Rgb),

    /// Fitzpatrick type outside 1..=6
    #[error("invalid Fitzpatrick type {0} (expected 1-6)")]
    InvalidFitzpatrickType(u8),

    /// Detector confidence is NaN or infinite
    #[error("confidence {0} is not a finite percentage")]
    InvalidConfidence(f64),

    /// No reference entry lies at a finite distance from the query
    #[error("query {0:?} has no finite distance to any reference tone")]
    UnmatchableQuery(WeightedRgb),

    /// Nearest-tone search over zero reference entries
    #[error("reference table is empty")]
    EmptyTable,

    /// Blend inputs of different lengths
    #[error("blend needs one weight per color: {colors} colors, {weights} weights")]
    BlendLengthMismatch { colors: usize, weights: usize },

    /// Anchor palette rejected
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
}

impl ToneError {
    pub(crate) fn malformed(input: &str, source: ParseColorError) -> Self {
        ToneError::MalformedColor {
            input: input.to_string(),
            source,
        }
    }
}
