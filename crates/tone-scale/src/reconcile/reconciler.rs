//! Per-record reconciliation of a detected tone onto both scales

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::blend::equation_color;
use super::record::{ReconciledRecord, RecordFailure, ToneRecord};
use crate::color::{Rgb, WeightedRgb};
use crate::error::ToneError;
use crate::palette::{classify, AnchorPalette, FitzpatrickType};
use crate::scale::{find_nearest, ReferenceEntry, ReferenceScale};

/// Which reference rows the nearest-tone search may pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Only the rows of the classified Fitzpatrick type
    #[default]
    FitzpatrickRange,
    /// All 36 rows, regardless of Fitzpatrick type
    FullTable,
}

/// How the query vector for the nearest-tone search is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Skin tone scaled by detector confidence
    #[default]
    WeightedTone,
    /// Dominant colors blended by their proportions, when present
    DominantBlend,
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fitzpatrick_range" | "range" => Ok(SearchScope::FitzpatrickRange),
            "full_table" | "full" => Ok(SearchScope::FullTable),
            other => Err(format!(
                "unknown search scope {other:?} (expected fitzpatrick_range or full_table)"
            )),
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchScope::FitzpatrickRange => f.write_str("fitzpatrick_range"),
            SearchScope::FullTable => f.write_str("full_table"),
        }
    }
}

impl FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "weighted_tone" | "weighted" => Ok(QueryMode::WeightedTone),
            "dominant_blend" | "blend" => Ok(QueryMode::DominantBlend),
            other => Err(format!(
                "unknown query mode {other:?} (expected weighted_tone or dominant_blend)"
            )),
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::WeightedTone => f.write_str("weighted_tone"),
            QueryMode::DominantBlend => f.write_str("dominant_blend"),
        }
    }
}

/// Full result of matching one tone, before it is flattened into a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneMatch {
    /// Detector color in canonical (trimmed, lower-case) form
    pub hex_color: String,
    /// Decoded, unweighted detector color
    pub color: Rgb,
    /// Vector used for the nearest-tone search
    pub query: WeightedRgb,
    pub fitzpatrick: FitzpatrickType,
    /// Closest von Luschan row
    pub entry: ReferenceEntry,
    /// Euclidean distance between `query` and `entry`
    pub distance: f64,
}

/// Reconciles detector records against the von Luschan scale and the
/// Fitzpatrick anchor palette.
///
/// Holds only immutable tables, so one instance can serve any number of
/// records, from any number of threads.
///
/// # Example
///
/// ```
/// use tone_scale::{ToneReconciler, ToneRecord};
///
/// let reconciler = ToneReconciler::default();
/// let out = reconciler
///     .reconcile(&ToneRecord::new("p1", "#373028", 100.0))
///     .unwrap();
/// assert_eq!(out.fitzpatrick_type, 6);
/// assert_eq!(out.von_luschan_index, 36);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToneReconciler {
    scale: ReferenceScale,
    anchors: AnchorPalette,
    scope: SearchScope,
    query: QueryMode,
}

impl ToneReconciler {
    pub fn new(scale: ReferenceScale, anchors: AnchorPalette) -> Self {
        Self {
            scale,
            anchors,
            scope: SearchScope::default(),
            query: QueryMode::default(),
        }
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_query(mut self, query: QueryMode) -> Self {
        self.query = query;
        self
    }

    pub fn scale(&self) -> &ReferenceScale {
        &self.scale
    }

    pub fn anchors(&self) -> &AnchorPalette {
        &self.anchors
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    pub fn query_mode(&self) -> QueryMode {
        self.query
    }

    /// Match one record, keeping the intermediate values.
    ///
    /// Classification uses the decoded color as-is; only the search query
    /// is weighted. Under [`SearchScope::FitzpatrickRange`] the match always
    /// lies inside the classified type's rows.
    ///
    /// Confidence outside 0..=100 is used as given; only NaN and infinity
    /// are rejected.
    pub fn match_tone(&self, record: &ToneRecord) -> Result<ToneMatch, ToneError> {
        let hex_color = record.canonical_hex();
        let color =
            Rgb::from_hex(&hex_color).map_err(|e| ToneError::malformed(&record.hex_color, e))?;
        if !record.confidence_percent.is_finite() {
            return Err(ToneError::InvalidConfidence(record.confidence_percent));
        }

        let fitzpatrick = classify(color, &self.anchors)?;
        let query = self.query_vector(record, color)?;

        let table = match self.scope {
            SearchScope::FitzpatrickRange => self.scale.slice_for(fitzpatrick),
            SearchScope::FullTable => self.scale.table(),
        };
        let (distance, entry) = find_nearest(table, query)?;

        Ok(ToneMatch {
            hex_color,
            color,
            query,
            fitzpatrick,
            entry,
            distance,
        })
    }

    /// Reconcile one record into an output row.
    pub fn reconcile(&self, record: &ToneRecord) -> Result<ReconciledRecord, ToneError> {
        let m = self.match_tone(record)?;
        Ok(ReconciledRecord {
            photo_id: record.photo_id.clone(),
            hex_color: m.hex_color,
            von_luschan_index: m.entry.tone_type,
            fitzpatrick_type: m.fitzpatrick.number(),
        })
    }

    /// Lazily reconcile a sequence of records, in order.
    ///
    /// A failing record yields a [`RecordFailure`] and does not affect the
    /// records after it. Stopping early is up to the consumer.
    pub fn reconcile_all<'r, I>(
        &'r self,
        records: I,
    ) -> impl Iterator<Item = Result<ReconciledRecord, RecordFailure>> + 'r
    where
        I: IntoIterator<Item = ToneRecord>,
        I::IntoIter: 'r,
    {
        records.into_iter().map(move |record| {
            self.reconcile(&record).map_err(|error| RecordFailure {
                photo_id: record.photo_id.clone(),
                error,
            })
        })
    }

    fn query_vector(&self, record: &ToneRecord, color: Rgb) -> Result<WeightedRgb, ToneError> {
        match self.query {
            QueryMode::DominantBlend => {
                let samples = record.dominant_samples();
                if samples.is_empty() {
                    return Ok(color.scaled(record.confidence_factor()));
                }
                let (colors, weights): (Vec<&str>, Vec<f64>) = samples.into_iter().unzip();
                equation_color(&colors, &weights)
            }
            QueryMode::WeightedTone => Ok(color.scaled(record.confidence_factor())),
        }
    }
}
