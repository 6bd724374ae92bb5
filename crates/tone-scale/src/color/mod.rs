//! Color types
//!
//! - [`Rgb`]: 8-bit channels, decoded from detector hex strings
//! - [`WeightedRgb`]: floating-point query vector for nearest-tone matching

mod rgb;
mod weighted;

pub use rgb::Rgb;
pub use weighted::WeightedRgb;
