//! TERPENE TARGET SCORING
//!
//! Terpene targets are minimum-threshold criteria. A strain at or above the
//! minimum earns the full target weight scaled by its surplus, capped at
//! 150% of base weight; between half the minimum and the minimum it earns
//! linear partial credit; below that, nothing.
//!
//! Avoid-compound penalties live here too: a profiled avoid compound
//! present above the significance threshold costs a flat 10 raw points,
//! with no matching increase of the best-case denominator.

use crate::compounds::{self, SIGNIFICANCE_THRESHOLD};
use crate::data::StrainRecord;
use crate::explanation::{CompoundAssessment, CompoundStatus, TargetBand};
use crate::profiles::{CompoundTarget, Threshold};
use std::collections::BTreeMap;

/// Surplus reward cap: value/minimum ratios beyond this stop earning.
pub const SURPLUS_CAP: f64 = 1.5;

/// Fraction of the minimum below which a terpene earns nothing.
pub const PARTIAL_CREDIT_FLOOR: f64 = 0.5;

/// Flat raw-score penalty per significant avoid compound.
pub const AVOID_PENALTY: f64 = 10.0;

/// Result of scoring a profile's terpene targets against one strain.
#[derive(Debug)]
pub struct TerpeneTargetScore {
    /// Raw-score contribution.
    pub contribution: f64,
    /// Best-case contribution (sum of signed weights × 100).
    pub max_possible: f64,
    /// Per-compound assessments, keyed by compound id.
    pub assessments: BTreeMap<String, CompoundAssessment>,
}

/// Score every terpene target in a profile.
pub fn score_terpene_targets(
    strain: &StrainRecord,
    targets: &BTreeMap<String, CompoundTarget>,
) -> TerpeneTargetScore {
    let mut contribution = 0.0;
    let mut max_possible = 0.0;
    let mut assessments = BTreeMap::new();

    for (compound_id, target) in targets {
        let min = match target.threshold {
            Threshold::Minimum { min } => min,
            // Registry validation rejects range-kind terpene targets.
            Threshold::PreferredRange { .. } => {
                debug_assert!(false, "terpene target must be minimum-kind");
                continue;
            }
        };
        debug_assert!(min > 0.0, "terpene minimum must be positive");

        max_possible += target.weight * 100.0;
        let value = strain.value(compound_id);

        let (status, credit) = if value >= min {
            (
                CompoundStatus::Excellent,
                target.weight * 100.0 * (value / min).min(SURPLUS_CAP),
            )
        } else if value >= PARTIAL_CREDIT_FLOOR * min {
            (CompoundStatus::Partial, target.weight * 100.0 * (value / min))
        } else {
            (CompoundStatus::Low, 0.0)
        };

        contribution += credit;
        assessments.insert(
            compound_id.clone(),
            CompoundAssessment {
                status,
                value,
                target: TargetBand::AtLeast(min),
            },
        );
    }

    TerpeneTargetScore {
        contribution,
        max_possible,
        assessments,
    }
}

/// Result of applying a profile's avoid-compound penalties.
#[derive(Debug)]
pub struct AvoidPenalty {
    /// Total raw-score deduction (non-negative; subtract from raw).
    pub penalty: f64,
    /// One note per penalized compound.
    pub notes: Vec<String>,
}

/// Penalize avoid compounds present above the significance threshold.
pub fn apply_avoid_penalties(strain: &StrainRecord, avoid_compounds: &[String]) -> AvoidPenalty {
    let mut penalty = 0.0;
    let mut notes = Vec::new();

    for compound_id in avoid_compounds {
        if strain.value(compound_id) > SIGNIFICANCE_THRESHOLD {
            penalty += AVOID_PENALTY;
            let display = compounds::lookup(compound_id)
                .map(|info| info.name)
                .unwrap_or(compound_id.as_str());
            notes.push(format!("High {} (may counteract desired effects)", display));
        }
    }

    AvoidPenalty { penalty, notes }
}
