//! Floating-point RGB comparison vector

use serde::Serialize;

use super::rgb::Rgb;

/// An RGB vector in floating point.
///
/// Produced by scaling a detected color by its confidence factor, or by
/// blending several colors. Channels are not clamped, so this is only
/// meaningful as a query for distance comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WeightedRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl WeightedRgb {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor`.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Channel-wise sum of two vectors.
    #[inline]
    pub fn sum(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    /// Squared Euclidean distance to an 8-bit color.
    #[inline]
    pub fn distance_squared_to(self, other: Rgb) -> f64 {
        let dr = self.r - f64::from(other.r);
        let dg = self.g - f64::from(other.g);
        let db = self.b - f64::from(other.b);
        dr * dr + dg * dg + db * db
    }
}

impl From<Rgb> for WeightedRgb {
    #[inline]
    fn from(c: Rgb) -> Self {
        Self::new(f64::from(c.r), f64::from(c.g), f64::from(c.b))
    }
}
