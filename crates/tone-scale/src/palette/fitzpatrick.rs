//! Fitzpatrick skin types and exact-match classification
//!
//! The detector only ever emits colors from its own tone palette, so the
//! type is decided by which anchor group the color belongs to. There is no
//! distance tolerance: a color outside the palette is an error.

use std::fmt;

use serde::{Serialize, Serializer};

use super::anchors::AnchorPalette;
use crate::color::Rgb;
use crate::error::ToneError;

/// Fitzpatrick skin type, lightest (1) to darkest (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FitzpatrickType {
    Type1 = 1,
    Type2 = 2,
    Type3 = 3,
    Type4 = 4,
    Type5 = 5,
    Type6 = 6,
}

impl FitzpatrickType {
    /// All types, lightest first.
    pub const ALL: [FitzpatrickType; 6] = [
        FitzpatrickType::Type1,
        FitzpatrickType::Type2,
        FitzpatrickType::Type3,
        FitzpatrickType::Type4,
        FitzpatrickType::Type5,
        FitzpatrickType::Type6,
    ];

    /// Numeric type, 1..=6.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Anchor palette indices whose colors classify as this type.
    pub fn anchor_indices(self) -> &'static [usize] {
        match self {
            FitzpatrickType::Type1 => &[9, 10],
            FitzpatrickType::Type2 => &[7, 8],
            FitzpatrickType::Type3 => &[5, 6],
            FitzpatrickType::Type4 => &[3, 4],
            FitzpatrickType::Type5 => &[1, 2],
            FitzpatrickType::Type6 => &[0],
        }
    }
}

impl TryFrom<u8> for FitzpatrickType {
    type Error = ToneError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FitzpatrickType::Type1),
            2 => Ok(FitzpatrickType::Type2),
            3 => Ok(FitzpatrickType::Type3),
            4 => Ok(FitzpatrickType::Type4),
            5 => Ok(FitzpatrickType::Type5),
            6 => Ok(FitzpatrickType::Type6),
            other => Err(ToneError::InvalidFitzpatrickType(other)),
        }
    }
}

impl From<FitzpatrickType> for u8 {
    fn from(t: FitzpatrickType) -> Self {
        t.number()
    }
}

impl fmt::Display for FitzpatrickType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for FitzpatrickType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// Group test order: single-anchor type 6 first, type 1 last.
const CLASSIFY_ORDER: [FitzpatrickType; 6] = [
    FitzpatrickType::Type6,
    FitzpatrickType::Type5,
    FitzpatrickType::Type4,
    FitzpatrickType::Type3,
    FitzpatrickType::Type2,
    FitzpatrickType::Type1,
];

/// Classify a detected color by exact anchor membership.
///
/// # Errors
///
/// [`ToneError::UnclassifiableTone`] if the color equals none of the
/// grouped anchor colors.
///
/// # Example
///
/// ```
/// use tone_scale::{classify, AnchorPalette, FitzpatrickType, Rgb};
///
/// let anchors = AnchorPalette::default();
/// let darkest = anchors.color(0);
/// assert_eq!(classify(darkest, &anchors).unwrap(), FitzpatrickType::Type6);
/// assert!(classify(Rgb::new(1, 2, 3), &anchors).is_err());
/// ```
pub fn classify(color: Rgb, anchors: &AnchorPalette) -> Result<FitzpatrickType, ToneError> {
    CLASSIFY_ORDER
        .into_iter()
        .find(|t| {
            t.anchor_indices()
                .iter()
                .any(|&idx| anchors.color(idx) == color)
        })
        .ok_or(ToneError::UnclassifiableTone(color))
}
