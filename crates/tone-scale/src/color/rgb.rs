//! 8-bit RGB color type and hex codec
//!
//! Detector output carries colors as `#rrggbb` strings. [`Rgb`] is the
//! decoded form used for exact palette comparison and as the starting point
//! for weighted query vectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::weighted::WeightedRgb;
use crate::palette::ParseColorError;

/// A color as three 8-bit channels.
///
/// Equality is exact per channel, which is what the Fitzpatrick anchor
/// lookup relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Decode a detector hex color.
    ///
    /// The first character is the marker (normally `#`) and is always
    /// stripped. The rest must be hexadecimal digits, at least six of them;
    /// the first six give red, green and blue. Surrounding whitespace is
    /// trimmed and digits are case-insensitive.
    ///
    /// # Example
    ///
    /// ```
    /// use tone_scale::Rgb;
    ///
    /// let tone = Rgb::from_hex("#9D7A54").unwrap();
    /// assert_eq!(tone, Rgb::new(157, 122, 84));
    /// assert!(Rgb::from_hex("#zz0000").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let mut chars = s.trim().chars();
        if chars.next().is_none() {
            return Err(ParseColorError::Empty);
        }
        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if digits.len() < 6 {
            return Err(ParseColorError::TooShort {
                found: digits.len(),
            });
        }

        // Every byte before an invalid one is an ASCII digit, so `position`
        // is always a char boundary.
        let invalid_at = |position: usize| ParseColorError::InvalidCharacter {
            character: digits[position..].chars().next().unwrap_or_default(),
            position,
        };

        let (channels, rest) = digits.as_bytes().split_at(6);
        let mut bytes = [0u8; 3];
        hex::decode_to_slice(channels, &mut bytes).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { index, .. } => invalid_at(index),
            _ => ParseColorError::TooShort {
                found: digits.len(),
            },
        })?;

        // Digits past the sixth are ignored but must still be hex.
        if let Some(offset) = rest.iter().position(|b| !b.is_ascii_hexdigit()) {
            return Err(invalid_at(6 + offset));
        }

        Ok(Self::from(bytes))
    }

    /// Encode as a lower-case `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode(self.to_bytes()))
    }

    /// Scale every channel by `factor`, producing a comparison vector.
    ///
    /// The result is not clamped and is not a displayable color.
    #[inline]
    pub fn scaled(self, factor: f64) -> WeightedRgb {
        WeightedRgb::from(self).scaled(factor)
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
