//! Weighted blending of several tone samples

use crate::color::{Rgb, WeightedRgb};
use crate::error::ToneError;

/// Weighted sum of several hex colors: `Σ weight_i * rgb(color_i)`.
///
/// Weights are applied as given and are not normalized. An empty input
/// yields the zero vector.
///
/// # Errors
///
/// - [`ToneError::BlendLengthMismatch`] if the slices differ in length
/// - [`ToneError::MalformedColor`] if any color fails to decode
///
/// # Example
///
/// ```
/// use tone_scale::{equation_color, WeightedRgb};
///
/// let blended = equation_color(&["#640000", "#006400"], &[0.5, 0.25]).unwrap();
/// assert_eq!(blended, WeightedRgb::new(50.0, 25.0, 0.0));
/// ```
pub fn equation_color<S: AsRef<str>>(
    colors: &[S],
    weights: &[f64],
) -> Result<WeightedRgb, ToneError> {
    if colors.len() != weights.len() {
        return Err(ToneError::BlendLengthMismatch {
            colors: colors.len(),
            weights: weights.len(),
        });
    }

    colors
        .iter()
        .zip(weights)
        .try_fold(WeightedRgb::default(), |sum, (hex, &weight)| {
            let hex = hex.as_ref();
            let rgb = Rgb::from_hex(hex).map_err(|e| ToneError::malformed(hex, e))?;
            Ok(sum.sum(rgb.scaled(weight)))
        })
}
