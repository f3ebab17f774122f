//! CANNABINOID TARGET SCORING
//!
//! Cannabinoid targets come in two shapes. Minimum-kind targets pay the
//! full absolute weight once the threshold is met and scale linearly below
//! it. Preferred-range targets pay the full absolute weight inside the
//! range and taper with relative distance outside it.
//!
//! Weight sign asymmetry, preserved deliberately: a negative-weight target
//! widens the best-case denominator by |weight|×100 like any other, but
//! its credit is suppressed everywhere: in range, below, and above. The
//! range of a negative-weight target is a tolerance zone that exists for
//! breakdown visibility, not a reward zone.

use crate::data::StrainRecord;
use crate::explanation::{CompoundAssessment, CompoundStatus, TargetBand};
use crate::profiles::{CompoundTarget, Threshold};
use std::collections::BTreeMap;

/// Result of scoring a profile's cannabinoid targets against one strain.
#[derive(Debug)]
pub struct CannabinoidTargetScore {
    /// Raw-score contribution (never negative).
    pub contribution: f64,
    /// Best-case contribution (sum of |weight| × 100).
    pub max_possible: f64,
    /// Per-compound assessments, keyed by compound id.
    pub assessments: BTreeMap<String, CompoundAssessment>,
}

/// Score every cannabinoid target in a profile.
pub fn score_cannabinoid_targets(
    strain: &StrainRecord,
    targets: &BTreeMap<String, CompoundTarget>,
) -> CannabinoidTargetScore {
    let mut contribution = 0.0;
    let mut max_possible = 0.0;
    let mut assessments = BTreeMap::new();

    for (compound_id, target) in targets {
        let weight_scale = target.weight.abs() * 100.0;
        max_possible += weight_scale;
        let value = strain.value(compound_id);

        let (status, credit, band) = match target.threshold {
            Threshold::Minimum { min } => {
                debug_assert!(min > 0.0, "cannabinoid minimum must be positive");
                if value >= min {
                    (CompoundStatus::Excellent, weight_scale, TargetBand::AtLeast(min))
                } else {
                    (
                        CompoundStatus::Low,
                        (weight_scale * value / min).max(0.0),
                        TargetBand::AtLeast(min),
                    )
                }
            }
            Threshold::PreferredRange { low, high } => {
                let band = TargetBand::Between(low, high);
                if value >= low && value <= high {
                    let credit = if target.weight > 0.0 { weight_scale } else { 0.0 };
                    (CompoundStatus::Optimal, credit, band)
                } else if value < low {
                    let credit = if target.weight > 0.0 && low > 0.0 {
                        (weight_scale * (1.0 - (low - value) / low)).max(0.0)
                    } else {
                        0.0
                    };
                    (CompoundStatus::Low, credit, band)
                } else {
                    let credit = if target.weight > 0.0 && high > 0.0 {
                        (weight_scale * (1.0 - (value - high) / high)).max(0.0)
                    } else {
                        0.0
                    };
                    (CompoundStatus::High, credit, band)
                }
            }
        };

        contribution += credit;
        assessments.insert(
            compound_id.clone(),
            CompoundAssessment {
                status,
                value,
                target: band,
            },
        );
    }

    CannabinoidTargetScore {
        contribution,
        max_possible,
        assessments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StrainClass;
    use approx::assert_relative_eq;
    use rustc_hash::FxHashMap;

    fn strain(pairs: &[(&str, f64)]) -> StrainRecord {
        let values: FxHashMap<String, f64> =
            pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        StrainRecord::new("Test", StrainClass::Hybrid, values)
    }

    fn single(id: &str, target: CompoundTarget) -> BTreeMap<String, CompoundTarget> {
        let mut targets = BTreeMap::new();
        targets.insert(id.to_string(), target);
        targets
    }

    fn min_target(weight: f64, min: f64) -> CompoundTarget {
        CompoundTarget {
            weight,
            threshold: Threshold::Minimum { min },
        }
    }

    fn range_target(weight: f64, low: f64, high: f64) -> CompoundTarget {
        CompoundTarget {
            weight,
            threshold: Threshold::PreferredRange { low, high },
        }
    }

    #[test]
    fn test_minimum_met_pays_full_weight() {
        let targets = single("thc_percent", min_target(0.3, 10.0));
        let result = score_cannabinoid_targets(&strain(&[("thc_percent", 18.0)]), &targets);

        assert_relative_eq!(result.contribution, 30.0, epsilon = 1e-12);
        assert_relative_eq!(result.max_possible, 30.0, epsilon = 1e-12);
        assert_eq!(
            result.assessments["thc_percent"].status,
            CompoundStatus::Excellent
        );
    }

    #[test]
    fn test_minimum_unmet_scales_linearly() {
        let targets = single("cbn_percent", min_target(0.2, 0.5));
        let result = score_cannabinoid_targets(&strain(&[("cbn_percent", 0.25)]), &targets);

        assert_relative_eq!(result.contribution, 10.0, epsilon = 1e-12);
        assert_eq!(result.assessments["cbn_percent"].status, CompoundStatus::Low);
    }

    #[test]
    fn test_minimum_no_surplus_reward() {
        // Unlike terpene targets, overshooting a cannabinoid minimum earns
        // nothing extra.
        let targets = single("thc_percent", min_target(0.3, 10.0));
        let at_min = score_cannabinoid_targets(&strain(&[("thc_percent", 10.0)]), &targets);
        let far_above = score_cannabinoid_targets(&strain(&[("thc_percent", 30.0)]), &targets);
        assert_relative_eq!(at_min.contribution, far_above.contribution, epsilon = 1e-12);
    }

    #[test]
    fn test_range_inside_pays_full_weight() {
        let targets = single("cbd_percent", range_target(0.1, 0.5, 3.0));
        let result = score_cannabinoid_targets(&strain(&[("cbd_percent", 1.2)]), &targets);

        assert_relative_eq!(result.contribution, 10.0, epsilon = 1e-12);
        assert_eq!(
            result.assessments["cbd_percent"].status,
            CompoundStatus::Optimal
        );
    }

    #[test]
    fn test_range_below_tapers_with_distance() {
        // 2.0 against (5, 15): distance 3, credit 0.2*100*(1 - 3/5) = 8.
        let targets = single("thc_percent", range_target(0.2, 5.0, 15.0));
        let result = score_cannabinoid_targets(&strain(&[("thc_percent", 2.0)]), &targets);

        assert_relative_eq!(result.contribution, 8.0, epsilon = 1e-12);
        assert_eq!(result.assessments["thc_percent"].status, CompoundStatus::Low);
    }

    #[test]
    fn test_range_above_tapers_with_distance() {
        // 20 against (5, 15): distance 5, credit 0.2*100*(1 - 5/15) = 13.33…
        let targets = single("thc_percent", range_target(0.2, 5.0, 15.0));
        let result = score_cannabinoid_targets(&strain(&[("thc_percent", 20.0)]), &targets);

        assert_relative_eq!(result.contribution, 40.0 / 3.0, epsilon = 1e-9);
        assert_eq!(result.assessments["thc_percent"].status, CompoundStatus::High);
    }

    #[test]
    fn test_range_far_outside_floors_at_zero() {
        let targets = single("thc_percent", range_target(0.2, 5.0, 15.0));
        let result = score_cannabinoid_targets(&strain(&[("thc_percent", 45.0)]), &targets);
        assert_relative_eq!(result.contribution, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_weight_never_contributes() {
        // Tolerance-zone semantics: denominator grows, credit stays zero
        // inside the range and on both sides of it.
        let targets = single("thc_percent", range_target(-0.2, 0.0, 12.0));

        for value in [0.0, 6.0, 12.0, 14.0, 30.0] {
            let result = score_cannabinoid_targets(&strain(&[("thc_percent", value)]), &targets);
            assert_relative_eq!(result.contribution, 0.0, epsilon = 1e-12);
            assert_relative_eq!(result.max_possible, 20.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_weight_status_still_reported() {
        let targets = single("thc_percent", range_target(-0.2, 0.0, 12.0));

        let inside = score_cannabinoid_targets(&strain(&[("thc_percent", 8.0)]), &targets);
        assert_eq!(
            inside.assessments["thc_percent"].status,
            CompoundStatus::Optimal
        );

        let above = score_cannabinoid_targets(&strain(&[("thc_percent", 25.0)]), &targets);
        assert_eq!(above.assessments["thc_percent"].status, CompoundStatus::High);
    }

    #[test]
    fn test_zero_low_range_boundary() {
        // (0, 2) ranges appear in curated data; value 0 is inside, not below.
        let targets = single("cbd_percent", range_target(0.1, 0.0, 2.0));
        let result = score_cannabinoid_targets(&strain(&[]), &targets);

        assert_relative_eq!(result.contribution, 10.0, epsilon = 1e-12);
        assert_eq!(
            result.assessments["cbd_percent"].status,
            CompoundStatus::Optimal
        );
    }
}
