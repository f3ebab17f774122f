//! Strain Scorer - coordinator for matching one strain against one profile
//!
//! Runs every scoring component in order, accumulating a raw score and a
//! best-case denominator in parallel, then normalizes to a 0-100 match
//! percentage. Deterministic, side-effect-free, no I/O.
//!
//! Scoring order (notes appear in this order too):
//!   1. Terpene targets
//!   2. Avoid-compound penalties (raw only, never the denominator)
//!   3. Cannabinoid targets
//!   4. Strain-class affinity
//!   5. Entourage pair rules
//!   6. Terpene-richness bonus
//!   7. Normalize and clamp to [0, 100]

use crate::data::StrainRecord;
use crate::explanation::{Explanation, MatchResult};
use crate::profiles::SymptomProfile;
use crate::scoring::{
    apply_avoid_penalties, score_cannabinoid_targets, score_entourage, score_terpene_richness,
    score_terpene_targets,
};

/// Bonus (and denominator slot) for matching the profile's preferred class.
pub const CLASS_AFFINITY_BONUS: f64 = 15.0;

/// Score one strain against one symptom profile.
pub fn score(strain: &StrainRecord, profile: &SymptomProfile) -> MatchResult {
    let terpenes = score_terpene_targets(strain, &profile.terpene_targets);
    let avoid = apply_avoid_penalties(strain, &profile.avoid_compounds);
    let cannabinoids = score_cannabinoid_targets(strain, &profile.cannabinoid_targets);

    let mut raw_score = terpenes.contribution - avoid.penalty + cannabinoids.contribution;
    let mut max_possible = terpenes.max_possible + cannabinoids.max_possible;
    let mut notes = avoid.notes;

    // Class affinity: denominator slot exists whether or not the profile
    // states a preference.
    max_possible += CLASS_AFFINITY_BONUS;
    if profile.preferred_class == Some(strain.strain_class) {
        raw_score += CLASS_AFFINITY_BONUS;
        notes.push(format!("{} genetics (preferred)", strain.strain_class));
    }

    let entourage = score_entourage(strain);
    raw_score += entourage.contribution;
    max_possible += entourage.max_possible;
    notes.extend(entourage.notes);

    let richness = score_terpene_richness(strain);
    raw_score += richness.contribution;
    max_possible += richness.max_possible;
    if let Some(note) = richness.note {
        notes.push(note);
    }

    // Penalties can drive the raw ratio negative; the reported percentage
    // is bounded on both ends.
    let final_score = if max_possible > 0.0 {
        (raw_score / max_possible * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    MatchResult {
        strain_name: strain.name.clone(),
        score: final_score,
        explanation: Explanation {
            terpenes: terpenes.assessments,
            cannabinoids: cannabinoids.assessments,
            notes,
            raw_score,
            max_possible,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StrainClass;
    use crate::explanation::CompoundStatus;
    use crate::profiles::{SymptomRegistry, Threshold};
    use approx::assert_relative_eq;
    use rustc_hash::FxHashMap;

    fn strain(name: &str, class: StrainClass, pairs: &[(&str, f64)]) -> StrainRecord {
        let values: FxHashMap<String, f64> =
            pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        StrainRecord::new(name, class, values)
    }

    /// Every accumulator term exercised at once, against the Sleep profile.
    ///
    /// Terpenes: myrcene 45 (capped), linalool 25 (at min), caryophyllene
    /// 7.5 (half credit) = 77.5 / 70. Cannabinoids: 30 + 20 + 10 = 60 / 60.
    /// Class: 15 / 15. Entourage: THC+CBD 8, THC+Myrcene 7 = 15 / 40.
    /// Richness: total 0.0185 → 4 / 8. Raw 171.5 / 193 → 88.8601…
    #[test]
    fn test_sleep_profile_full_arithmetic() {
        let registry = SymptomRegistry::builtin().unwrap();
        let sleep = registry.get("need Sleep").unwrap();

        let gdp = strain(
            "Granddaddy Purple",
            StrainClass::Indica,
            &[
                ("myrcene", 0.01),
                ("linalool", 0.004),
                ("caryophyllene", 0.0015),
                ("limonene", 0.002),
                ("humulene", 0.001),
                ("thc_percent", 18.0),
                ("cbd_percent", 0.6),
                ("cbn_percent", 0.8),
                ("cbg_percent", 0.2),
                ("cbc_percent", 0.1),
            ],
        );

        let result = score(&gdp, sleep);

        assert_relative_eq!(result.explanation.raw_score, 171.5, epsilon = 1e-9);
        assert_relative_eq!(result.explanation.max_possible, 193.0, epsilon = 1e-9);
        assert_relative_eq!(result.score, 171.5 / 193.0 * 100.0, epsilon = 1e-9);
        assert_relative_eq!(result.score, 88.86010362694301, epsilon = 1e-9);

        assert_eq!(
            result.explanation.terpenes["myrcene"].status,
            CompoundStatus::Excellent
        );
        assert_eq!(
            result.explanation.terpenes["caryophyllene"].status,
            CompoundStatus::Partial
        );
        assert_eq!(
            result.explanation.cannabinoids["cbd_percent"].status,
            CompoundStatus::Optimal
        );

        let notes = &result.explanation.notes;
        assert!(notes.iter().any(|n| n.contains("Indica genetics")));
        assert!(notes.iter().any(|n| n.contains("THC+CBD")));
        assert!(notes.iter().any(|n| n.contains("THC+Myrcene")));
        assert!(notes.iter().any(|n| n.contains("Good terpene content")));
    }

    /// Avoid penalty shifts the raw score by exactly 10 with the
    /// denominator untouched, visible through normalization.
    #[test]
    fn test_avoid_penalty_against_clean_twin() {
        use crate::profiles::{CompoundTarget, SymptomProfile};
        use std::collections::BTreeMap;

        let mut terpene_targets = BTreeMap::new();
        terpene_targets.insert(
            "myrcene".to_string(),
            CompoundTarget {
                weight: 0.3,
                threshold: Threshold::Minimum { min: 0.005 },
            },
        );
        let profile = SymptomProfile {
            key: "test".to_string(),
            pitch: String::new(),
            best_time: String::new(),
            onset: String::new(),
            duration: String::new(),
            terpene_targets,
            cannabinoid_targets: BTreeMap::new(),
            avoid_compounds: vec!["pinene".to_string()],
            preferred_class: None,
        };

        // Twins with identical totals (same richness tier), differing only
        // in where the terpene mass sits.
        let clean = strain(
            "Clean",
            StrainClass::Hybrid,
            &[("myrcene", 0.006), ("ocimene", 0.008)],
        );
        let flagged = strain(
            "Flagged",
            StrainClass::Hybrid,
            &[("myrcene", 0.006), ("ocimene", 0.002), ("pinene", 0.006)],
        );

        let clean_result = score(&clean, &profile);
        let flagged_result = score(&flagged, &profile);

        // raw 40 vs 30 over a shared denominator of 93.
        assert_relative_eq!(clean_result.explanation.raw_score, 40.0, epsilon = 1e-9);
        assert_relative_eq!(flagged_result.explanation.raw_score, 30.0, epsilon = 1e-9);
        assert_relative_eq!(
            clean_result.explanation.max_possible,
            flagged_result.explanation.max_possible,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            clean_result.score - flagged_result.score,
            10.0 / 93.0 * 100.0,
            epsilon = 1e-9
        );
        assert!(flagged_result
            .explanation
            .notes
            .iter()
            .any(|n| n.contains("Pinene")));
    }

    #[test]
    fn test_penalty_floor_clamps_to_zero() {
        use crate::profiles::SymptomProfile;
        use std::collections::BTreeMap;

        // Penalties only: raw goes negative, reported score does not.
        let profile = SymptomProfile {
            key: "test".to_string(),
            pitch: String::new(),
            best_time: String::new(),
            onset: String::new(),
            duration: String::new(),
            terpene_targets: BTreeMap::new(),
            cannabinoid_targets: BTreeMap::new(),
            avoid_compounds: vec!["pinene".to_string(), "terpinolene".to_string()],
            preferred_class: None,
        };
        let harsh = strain(
            "Harsh",
            StrainClass::Sativa,
            &[("pinene", 0.01), ("terpinolene", 0.01)],
        );

        let result = score(&harsh, &profile);
        assert!(result.explanation.raw_score < 0.0);
        assert_relative_eq!(result.score, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_score_bounded_for_builtin_profiles() {
        let registry = SymptomRegistry::builtin().unwrap();
        let extremes = [
            strain("Empty", StrainClass::Hybrid, &[]),
            strain(
                "Maxed",
                StrainClass::Indica,
                &[
                    ("myrcene", 0.05),
                    ("limonene", 0.05),
                    ("caryophyllene", 0.05),
                    ("linalool", 0.05),
                    ("pinene", 0.05),
                    ("humulene", 0.05),
                    ("terpinolene", 0.05),
                    ("ocimene", 0.05),
                    ("thc_percent", 35.0),
                    ("cbd_percent", 20.0),
                    ("cbn_percent", 5.0),
                    ("cbg_percent", 3.0),
                    ("thcv_percent", 2.0),
                    ("cbc_percent", 1.0),
                ],
            ),
        ];

        for key in registry.keys() {
            let profile = registry.get(key).unwrap();
            for s in &extremes {
                let result = score(s, profile);
                assert!(
                    (0.0..=100.0).contains(&result.score),
                    "{} vs {}: score {} out of bounds",
                    s.name,
                    key,
                    result.score
                );
            }
        }
    }

    #[test]
    fn test_missing_is_zero_equivalence() {
        let registry = SymptomRegistry::builtin().unwrap();
        let focus = registry.get("need Focus").unwrap();

        let sparse = strain("Sparse", StrainClass::Sativa, &[("pinene", 0.004)]);
        let explicit = strain(
            "Explicit",
            StrainClass::Sativa,
            &[
                ("pinene", 0.004),
                ("limonene", 0.0),
                ("terpinolene", 0.0),
                ("myrcene", 0.0),
                ("thc_percent", 0.0),
                ("thcv_percent", 0.0),
                ("cbd_percent", 0.0),
            ],
        );

        let a = score(&sparse, focus);
        let b = score(&explicit, focus);
        assert_relative_eq!(a.score, b.score, epsilon = 1e-12);
        assert_relative_eq!(
            a.explanation.raw_score,
            b.explanation.raw_score,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_determinism() {
        let registry = SymptomRegistry::builtin().unwrap();
        let profile = registry.get("need Pain Relief").unwrap();
        let s = strain(
            "Repeat",
            StrainClass::Indica,
            &[
                ("caryophyllene", 0.005),
                ("myrcene", 0.007),
                ("thc_percent", 14.0),
                ("cbd_percent", 1.1),
            ],
        );

        let first = score(&s, profile);
        let second = score(&s, profile);
        assert_eq!(first.score, second.score);
        assert_eq!(first.explanation.notes, second.explanation.notes);
    }

    #[test]
    fn test_class_mismatch_no_bonus_but_denominator_grows() {
        let registry = SymptomRegistry::builtin().unwrap();
        let sleep = registry.get("need Sleep").unwrap();

        let indica = strain("A", StrainClass::Indica, &[("myrcene", 0.0075)]);
        let sativa = strain("B", StrainClass::Sativa, &[("myrcene", 0.0075)]);

        let a = score(&indica, sleep);
        let b = score(&sativa, sleep);

        assert_relative_eq!(
            a.explanation.raw_score - b.explanation.raw_score,
            CLASS_AFFINITY_BONUS,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            a.explanation.max_possible,
            b.explanation.max_possible,
            epsilon = 1e-12
        );
    }
}
