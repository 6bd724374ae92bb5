//! Anchor palette: the detector's canonical skin-tone colors
//!
//! The palette is keyed by position. Index 0 is the darkest tone and index
//! 10 the lightest; the Fitzpatrick groups refer to these positions.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Rgb;

/// Smallest palette that covers every anchor group index (0..=10).
pub const MIN_ANCHORS: usize = 11;

/// The tone detector's default color palette, darkest first.
pub const DEFAULT_TONE_PALETTE: [Rgb; MIN_ANCHORS] = [
    Rgb::new(0x37, 0x30, 0x28),
    Rgb::new(0x42, 0x28, 0x11),
    Rgb::new(0x51, 0x3b, 0x2e),
    Rgb::new(0x6f, 0x50, 0x3c),
    Rgb::new(0x81, 0x65, 0x4f),
    Rgb::new(0x9d, 0x7a, 0x54),
    Rgb::new(0xbe, 0xa0, 0x7e),
    Rgb::new(0xe5, 0xc8, 0xa6),
    Rgb::new(0xe7, 0xc1, 0xb8),
    Rgb::new(0xf3, 0xda, 0xd6),
    Rgb::new(0xfb, 0xf2, 0xf3),
];

/// An immutable, validated anchor palette.
///
/// Construction guarantees at least [`MIN_ANCHORS`] distinct colors, so
/// every index referenced by the Fitzpatrick groups is present.
///
/// # Example
///
/// ```
/// use tone_scale::AnchorPalette;
///
/// let anchors = AnchorPalette::default();
/// assert_eq!(anchors.len(), 11);
/// assert_eq!(anchors.color(0).to_hex(), "#373028");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorPalette {
    colors: Vec<Rgb>,
}

impl AnchorPalette {
    /// Create a palette from decoded colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::TooSmall`] with fewer than [`MIN_ANCHORS`] colors
    /// - [`PaletteError::DuplicateColor`] if a color repeats; a repeated
    ///   anchor would make group membership ambiguous
    pub fn new(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.len() < MIN_ANCHORS {
            return Err(PaletteError::TooSmall {
                len: colors.len(),
                required: MIN_ANCHORS,
            });
        }

        let mut seen = HashSet::new();
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        Ok(Self { colors })
    }

    /// Create a palette from hex strings such as `"#373028"`.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Rgb::from_hex(s.as_ref())
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Anchor color at `idx`.
    ///
    /// Panics if `idx >= len()`. Indices below [`MIN_ANCHORS`] are always valid.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Default for AnchorPalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_TONE_PALETTE.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    #[test]
    fn test_default_palette_is_valid() {
        let rebuilt = AnchorPalette::new(DEFAULT_TONE_PALETTE.to_vec()).unwrap();
        assert_eq!(rebuilt, AnchorPalette::default());
    }

    #[test]
    fn test_default_palette_hex_values() {
        let hex: Vec<String> = AnchorPalette::default()
            .colors()
            .iter()
            .map(|c| c.to_hex())
            .collect();
        assert_eq!(
            hex,
            [
                "#373028", "#422811", "#513b2e", "#6f503c", "#81654f", "#9d7a54", "#bea07e",
                "#e5c8a6", "#e7c1b8", "#f3dad6", "#fbf2f3",
            ]
        );
    }

    #[test]
    fn test_too_small() {
        let result = AnchorPalette::new(DEFAULT_TONE_PALETTE[..10].to_vec());
        assert_eq!(
            result,
            Err(PaletteError::TooSmall {
                len: 10,
                required: 11
            })
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut colors = DEFAULT_TONE_PALETTE.to_vec();
        colors.push(DEFAULT_TONE_PALETTE[4]);
        assert_eq!(
            AnchorPalette::new(colors),
            Err(PaletteError::DuplicateColor { index: 11 })
        );
    }

    #[test]
    fn test_from_hex_reports_index() {
        let mut hex: Vec<String> = DEFAULT_TONE_PALETTE.iter().map(|c| c.to_hex()).collect();
        hex[5] = "#nothex".to_string();
        match AnchorPalette::from_hex(&hex) {
            Err(PaletteError::ParseColor { index, source }) => {
                assert_eq!(index, 5);
                assert!(matches!(source, ParseColorError::InvalidCharacter { .. }));
            }
            other => panic!("expected ParseColor error, got {other:?}"),
        }
    }
}
