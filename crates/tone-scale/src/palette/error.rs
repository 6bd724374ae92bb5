//! Error types for color decoding and anchor palette validation.

use thiserror::Error;

/// Error type for decoding hex color strings.
///
/// Returned when a detector color cannot be split into three byte-valued
/// channels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Nothing left to decode (empty string, or only the marker character)
    #[error("empty hex color")]
    Empty,
    /// Fewer than six hex digits after the marker
    #[error("hex color too short: expected 6 digits, found {found}")]
    TooShort {
        /// Number of bytes found after the marker
        found: usize,
    },
    /// A character after the marker is not a hexadecimal digit
    #[error("invalid hex character {character:?} at byte {position}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Byte offset after the marker (0-based)
        position: usize,
    },
}

/// Error type for anchor palette validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// Palette does not cover every index the classifier groups reference
    #[error("anchor palette needs at least {required} colors, got {len}")]
    TooSmall {
        /// Number of colors supplied
        len: usize,
        /// Minimum number of colors
        required: usize,
    },
    /// Duplicate color found at the specified index
    #[error("duplicate anchor color at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Invalid hex color string
    #[error("invalid anchor color at index {index}: {source}")]
    ParseColor {
        /// Index of the color that failed to parse
        index: usize,
        /// Underlying parse failure
        #[source]
        source: ParseColorError,
    },
}
