//! The von Luschan reference scale and its Fitzpatrick partition

use serde::Serialize;

use crate::color::Rgb;
use crate::error::ToneError;
use crate::palette::FitzpatrickType;

/// Number of rows on the von Luschan scale.
pub const SCALE_LEN: usize = 36;

/// One row of the reference scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    /// von Luschan type, 1..=36 (table index + 1)
    pub tone_type: u8,
    pub rgb: Rgb,
}

const fn entry(tone_type: u8, r: u8, g: u8, b: u8) -> ReferenceEntry {
    ReferenceEntry {
        tone_type,
        rgb: Rgb::new(r, g, b),
    }
}

/// von Luschan chromatic scale as sRGB, type 1 (lightest) to 36 (darkest).
pub const VON_LUSCHAN: [ReferenceEntry; SCALE_LEN] = [
    entry(1, 244, 242, 245),
    entry(2, 236, 235, 233),
    entry(3, 250, 249, 247),
    entry(4, 253, 251, 230),
    entry(5, 253, 246, 230),
    entry(6, 254, 247, 229),
    entry(7, 250, 240, 239),
    entry(8, 243, 234, 229),
    entry(9, 244, 241, 234),
    entry(10, 251, 252, 244),
    entry(11, 252, 248, 237),
    entry(12, 254, 246, 225),
    entry(13, 255, 249, 225),
    entry(14, 255, 249, 225),
    entry(15, 241, 231, 195),
    entry(16, 239, 226, 173),
    entry(17, 224, 210, 147),
    entry(18, 242, 226, 151),
    entry(19, 235, 214, 159),
    entry(20, 235, 217, 133),
    entry(21, 227, 196, 103),
    entry(22, 225, 193, 106),
    entry(23, 223, 193, 123),
    entry(24, 222, 184, 119),
    entry(25, 199, 164, 100),
    entry(26, 188, 151, 98),
    entry(27, 156, 107, 67),
    entry(28, 142, 88, 62),
    entry(29, 121, 77, 48),
    entry(30, 100, 49, 22),
    entry(31, 101, 48, 32),
    entry(32, 96, 49, 33),
    entry(33, 87, 50, 33),
    entry(34, 64, 32, 21),
    entry(35, 49, 37, 41),
    entry(36, 27, 28, 46),
];

impl FitzpatrickType {
    /// Inclusive index range of this type's rows on the von Luschan scale.
    pub fn luschan_range(self) -> (usize, usize) {
        match self {
            FitzpatrickType::Type1 => (0, 6),
            FitzpatrickType::Type2 => (7, 13),
            FitzpatrickType::Type3 => (14, 20),
            FitzpatrickType::Type4 => (21, 27),
            FitzpatrickType::Type5 => (28, 34),
            FitzpatrickType::Type6 => (35, 35),
        }
    }
}

/// The immutable reference table, built once and passed by reference.
///
/// # Example
///
/// ```
/// use tone_scale::{FitzpatrickType, ReferenceScale};
///
/// let scale = ReferenceScale::default();
/// assert_eq!(scale.range_for(6).unwrap(), (35, 35));
/// assert_eq!(scale.slice_for(FitzpatrickType::Type1).len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceScale {
    entries: [ReferenceEntry; SCALE_LEN],
}

impl ReferenceScale {
    /// All 36 rows; index is `tone_type - 1`.
    #[inline]
    pub fn table(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Inclusive index range for a numeric Fitzpatrick type.
    ///
    /// # Errors
    ///
    /// [`ToneError::InvalidFitzpatrickType`] outside 1..=6.
    pub fn range_for(&self, fitzpatrick_type: u8) -> Result<(usize, usize), ToneError> {
        FitzpatrickType::try_from(fitzpatrick_type).map(FitzpatrickType::luschan_range)
    }

    /// The rows belonging to a Fitzpatrick type, in table order.
    pub fn slice_for(&self, fitzpatrick_type: FitzpatrickType) -> &[ReferenceEntry] {
        let (start, end) = fitzpatrick_type.luschan_range();
        &self.entries[start..=end]
    }

    /// Fitzpatrick type whose range contains the given von Luschan type.
    pub fn fitzpatrick_of(&self, tone_type: u8) -> Option<FitzpatrickType> {
        let idx = usize::from(tone_type).checked_sub(1)?;
        FitzpatrickType::ALL.into_iter().find(|t| {
            let (start, end) = t.luschan_range();
            (start..=end).contains(&idx)
        })
    }
}

impl Default for ReferenceScale {
    fn default() -> Self {
        Self {
            entries: VON_LUSCHAN,
        }
    }
}
