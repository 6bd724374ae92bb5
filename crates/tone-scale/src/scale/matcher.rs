//! Nearest reference tone search

use super::von_luschan::ReferenceEntry;
use crate::color::WeightedRgb;
use crate::error::ToneError;

/// Find the reference entry closest to `target` by Euclidean RGB distance.
///
/// `table` can be the whole scale or any slice of it. The scan keeps the
/// first entry at the minimum distance, so ties resolve to the lower index.
/// Only finite distances are considered.
///
/// Returns `(distance, entry)`.
///
/// # Errors
///
/// - [`ToneError::EmptyTable`] if `table` is empty
/// - [`ToneError::UnmatchableQuery`] if no entry is at a finite distance,
///   e.g. when `target` has a NaN channel
///
/// # Example
///
/// ```
/// use tone_scale::{find_nearest, ReferenceScale, WeightedRgb};
///
/// let scale = ReferenceScale::default();
/// let first = scale.table()[0];
/// let (dist, best) = find_nearest(scale.table(), WeightedRgb::from(first.rgb)).unwrap();
/// assert_eq!(dist, 0.0);
/// assert_eq!(best.tone_type, 1);
/// ```
pub fn find_nearest(
    table: &[ReferenceEntry],
    target: WeightedRgb,
) -> Result<(f64, ReferenceEntry), ToneError> {
    if table.is_empty() {
        return Err(ToneError::EmptyTable);
    }

    // Compare squared distances; take the root once for the winner.
    // NaN and infinity never compare below the starting bound.
    let mut best: Option<ReferenceEntry> = None;
    let mut best_dist = f64::INFINITY;

    for &entry in table {
        let dist = target.distance_squared_to(entry.rgb);
        if dist < best_dist {
            best_dist = dist;
            best = Some(entry);
        }
    }

    best.map(|entry| (best_dist.sqrt(), entry))
        .ok_or(ToneError::UnmatchableQuery(target))
}
