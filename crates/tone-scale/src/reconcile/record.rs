//! Input and output records
//!
//! Field renames are the column contract of the tone detector's CSV output
//! and of the reconciled table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ToneError;

/// One row of tone detector output.
///
/// Only `file`, `skin tone` and `accuracy(0-100)` are required. The dominant
/// color columns are read when present and feed the blend query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToneRecord {
    #[serde(rename = "file")]
    pub photo_id: String,

    #[serde(rename = "skin tone")]
    pub hex_color: String,

    #[serde(rename = "accuracy(0-100)")]
    pub confidence_percent: f64,

    #[serde(rename = "dominant 1", default)]
    pub dominant_1: Option<String>,

    #[serde(rename = "percent 1", default)]
    pub percent_1: Option<f64>,

    #[serde(rename = "dominant 2", default)]
    pub dominant_2: Option<String>,

    #[serde(rename = "percent 2", default)]
    pub percent_2: Option<f64>,
}

impl ToneRecord {
    pub fn new(
        photo_id: impl Into<String>,
        hex_color: impl Into<String>,
        confidence_percent: f64,
    ) -> Self {
        Self {
            photo_id: photo_id.into(),
            hex_color: hex_color.into(),
            confidence_percent,
            dominant_1: None,
            percent_1: None,
            dominant_2: None,
            percent_2: None,
        }
    }

    /// Attach dominant color samples for blend queries.
    pub fn with_dominants(mut self, first: (&str, f64), second: Option<(&str, f64)>) -> Self {
        self.dominant_1 = Some(first.0.to_string());
        self.percent_1 = Some(first.1);
        if let Some((hex, percent)) = second {
            self.dominant_2 = Some(hex.to_string());
            self.percent_2 = Some(percent);
        }
        self
    }

    /// Detector confidence as a factor in 0..=1.
    #[inline]
    pub fn confidence_factor(&self) -> f64 {
        self.confidence_percent / 100.0
    }

    /// The skin tone in canonical (trimmed, lower-case) form.
    pub fn canonical_hex(&self) -> String {
        self.hex_color.trim().to_lowercase()
    }

    /// Complete (color, proportion) dominant samples, in column order.
    pub fn dominant_samples(&self) -> Vec<(&str, f64)> {
        [
            (self.dominant_1.as_deref(), self.percent_1),
            (self.dominant_2.as_deref(), self.percent_2),
        ]
        .into_iter()
        .filter_map(|(hex, percent)| match (hex, percent) {
            (Some(hex), Some(percent)) if !hex.trim().is_empty() => Some((hex, percent)),
            _ => None,
        })
        .collect()
    }
}

/// One row of the reconciled table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledRecord {
    #[serde(rename = "photo")]
    pub photo_id: String,

    #[serde(rename = "skin_tone_hex")]
    pub hex_color: String,

    /// von Luschan type, 1..=36
    #[serde(rename = "von_lus_index")]
    pub von_luschan_index: u8,

    /// Fitzpatrick type, 1..=6
    #[serde(rename = "fitzpatrick_index")]
    pub fitzpatrick_type: u8,
}

/// A record that could not be reconciled, keyed by its photo.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{photo_id}: {error}")]
pub struct RecordFailure {
    pub photo_id: String,
    #[source]
    pub error: ToneError,
}
