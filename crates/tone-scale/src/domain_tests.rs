//! Domain-critical regression tests for tone-scale.
//!
//! Each test names the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::color::{Rgb, WeightedRgb};
    use crate::error::ToneError;
    use crate::palette::{classify, AnchorPalette, FitzpatrickType};
    use crate::reconcile::{SearchScope, ToneReconciler, ToneRecord};
    use crate::scale::{find_nearest, ReferenceScale};

    // ========================================================================
    // Classification must use the raw color, not the weighted query
    // ========================================================================

    /// If this breaks, it means: the classifier is fed the confidence-scaled
    /// vector. Scaled channels are fractional and never equal an anchor, so
    /// every record below 100% confidence would become unclassifiable.
    #[test]
    fn test_low_confidence_still_classifies() {
        let reconciler = ToneReconciler::default();
        for confidence in [99.0, 64.5, 1.0, 0.0] {
            let out = reconciler
                .reconcile(&ToneRecord::new("p", "#bea07e", confidence))
                .unwrap_or_else(|e| panic!("REGRESSION: {confidence}% failed with {e}"));
            assert_eq!(out.fitzpatrick_type, 3);
        }
    }

    // ========================================================================
    // Weighting must reach the matcher
    // ========================================================================

    /// If this breaks, it means: the confidence factor is dropped before the
    /// nearest-tone search, so detector accuracy no longer influences the
    /// von Luschan index.
    #[test]
    fn test_weighting_changes_von_luschan_index() {
        let reconciler = ToneReconciler::default();
        let full = reconciler
            .match_tone(&ToneRecord::new("p", "#fbf2f3", 100.0))
            .unwrap();
        let half = reconciler
            .match_tone(&ToneRecord::new("p", "#fbf2f3", 50.0))
            .unwrap();

        assert_eq!(half.query, full.query.scaled(0.5));
        assert_eq!(full.entry.tone_type, 7);
        assert_eq!(
            half.entry.tone_type, 2,
            "REGRESSION: halving confidence should move #fbf2f3 from type 7 to type 2"
        );
    }

    // ========================================================================
    // Range restriction
    // ========================================================================

    /// If this breaks, it means: the search ignores the Fitzpatrick range and
    /// a light Fitzpatrick type can land on a dark von Luschan row (the
    /// full-table result for this input is type 27).
    #[test]
    fn test_range_restriction_is_applied() {
        let ranged = ToneReconciler::default();
        let full = ToneReconciler::default().with_scope(SearchScope::FullTable);
        let record = ToneRecord::new("p", "#f3dad6", 50.0);

        assert_eq!(ranged.reconcile(&record).unwrap().von_luschan_index, 2);
        assert_eq!(full.reconcile(&record).unwrap().von_luschan_index, 27);
    }

    /// If this breaks, it means: the type 6 range was narrowed to an empty
    /// slice (an exclusive upper bound at 35), so the darkest tones fail
    /// with an empty table.
    #[test]
    fn test_type_6_range_is_not_empty() {
        let scale = ReferenceScale::default();
        let rows = scale.slice_for(FitzpatrickType::Type6);
        assert_eq!(rows.len(), 1);
        assert!(find_nearest(rows, WeightedRgb::default()).is_ok());
    }

    // ========================================================================
    // Exact-match contract
    // ========================================================================

    /// If this breaks, it means: classification was relaxed to a distance
    /// match, silently assigning types to colors the detector never emits.
    #[test]
    fn test_near_miss_is_rejected() {
        let anchors = AnchorPalette::default();
        for &anchor in anchors.colors() {
            let nudged = Rgb::new(anchor.r, anchor.g, anchor.b ^ 1);
            assert!(
                matches!(classify(nudged, &anchors), Err(ToneError::UnclassifiableTone(_))),
                "REGRESSION: {nudged} (one bit off {anchor}) was classified"
            );
        }
    }

    /// If this breaks, it means: hex case leaks into classification, so the
    /// detector's upper-case output stops matching the lower-case palette.
    #[test]
    fn test_upper_case_detector_output() {
        let reconciler = ToneReconciler::default();
        let upper = reconciler
            .reconcile(&ToneRecord::new("p", "#E7C1B8", 90.0))
            .unwrap();
        let lower = reconciler
            .reconcile(&ToneRecord::new("p", "#e7c1b8", 90.0))
            .unwrap();
        assert_eq!(upper, lower);
    }
}
