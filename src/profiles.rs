//! Symptom Profile Registry
//!
//! The hand-curated table of scoring targets, one profile per user intent
//! ("need Sleep", "need Focus", ...). Each profile weights a handful of
//! terpene and cannabinoid targets, lists compounds whose presence works
//! against the intent, and optionally prefers a strain class. Profiles also
//! carry presentation strings (pitch, timing) that the scoring engine never
//! reads.
//!
//! The registry is built once at startup and validated there: a target
//! with an unscorable threshold or an unknown compound id is a data bug,
//! caught before any strain is scored.

use crate::compounds::{self, CompoundKind};
use crate::data::StrainClass;
use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Threshold shape of a compound target. Exactly one band per target, by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Threshold {
    /// Reward values at or above `min`; partial credit below it.
    Minimum { min: f64 },
    /// Reward values inside [low, high]; taper with distance outside.
    PreferredRange { low: f64, high: f64 },
}

/// One scoring criterion for one compound within a profile.
///
/// A positive weight rewards presence. A negative weight never contributes
/// to the raw score; it widens the denominator so the target stays visible
/// in breakdowns, and its range marks a tolerance zone rather than a reward
/// zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundTarget {
    pub weight: f64,
    pub threshold: Threshold,
}

/// Scoring target for one user intent, plus pass-through presentation
/// metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomProfile {
    pub key: String,
    /// Customer-facing pitch line (presentation only).
    pub pitch: String,
    /// Suggested time of use (presentation only).
    pub best_time: String,
    /// Typical onset window (presentation only).
    pub onset: String,
    /// Typical duration window (presentation only).
    pub duration: String,
    pub terpene_targets: BTreeMap<String, CompoundTarget>,
    pub cannabinoid_targets: BTreeMap<String, CompoundTarget>,
    /// Compounds penalized when present above the significance threshold.
    pub avoid_compounds: Vec<String>,
    pub preferred_class: Option<StrainClass>,
}

/// Read-only lookup over the curated symptom profiles.
pub struct SymptomRegistry {
    profiles: BTreeMap<String, SymptomProfile>,
}

impl SymptomRegistry {
    /// Build and validate the curated registry. Fails fast on any
    /// data-integrity violation.
    pub fn builtin() -> Result<Self, RegistryError> {
        let registry = SymptomRegistry {
            profiles: builtin_profiles(),
        };
        for profile in registry.profiles.values() {
            validate_profile(profile)?;
        }
        tracing::debug!(profiles = registry.profiles.len(), "symptom registry ready");
        Ok(registry)
    }

    pub fn get(&self, key: &str) -> Option<&SymptomProfile> {
        self.profiles.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Check one profile's targets against the compound reference table.
pub fn validate_profile(profile: &SymptomProfile) -> Result<(), RegistryError> {
    let known = |compound: &str| -> Result<&'static compounds::CompoundInfo, RegistryError> {
        compounds::lookup(compound).ok_or_else(|| RegistryError::UnknownCompound {
            profile: profile.key.clone(),
            compound: compound.to_string(),
        })
    };

    for (compound, target) in &profile.terpene_targets {
        let info = known(compound)?;
        if info.kind != CompoundKind::Terpene {
            return Err(malformed(profile, compound, "not a terpene"));
        }
        match target.threshold {
            Threshold::Minimum { min } if min > 0.0 => {}
            Threshold::Minimum { .. } => {
                return Err(malformed(profile, compound, "minimum must be > 0"));
            }
            Threshold::PreferredRange { .. } => {
                return Err(malformed(
                    profile,
                    compound,
                    "terpene targets take a minimum threshold",
                ));
            }
        }
    }

    for (compound, target) in &profile.cannabinoid_targets {
        let info = known(compound)?;
        if info.kind != CompoundKind::Cannabinoid {
            return Err(malformed(profile, compound, "not a cannabinoid"));
        }
        match target.threshold {
            Threshold::Minimum { min } => {
                if min <= 0.0 {
                    return Err(malformed(profile, compound, "minimum must be > 0"));
                }
            }
            Threshold::PreferredRange { low, high } => {
                if low > high {
                    return Err(malformed(profile, compound, "range low exceeds high"));
                }
                if low < 0.0 {
                    return Err(malformed(profile, compound, "range low must be >= 0"));
                }
            }
        }
    }

    for compound in &profile.avoid_compounds {
        known(compound)?;
    }

    Ok(())
}

fn malformed(profile: &SymptomProfile, compound: &str, reason: &str) -> RegistryError {
    RegistryError::MalformedCompoundTarget {
        profile: profile.key.clone(),
        compound: compound.to_string(),
        reason: reason.to_string(),
    }
}

// ============================================================================
// CURATED PROFILE DATA
// ============================================================================

fn tmin(weight: f64, min: f64) -> CompoundTarget {
    CompoundTarget {
        weight,
        threshold: Threshold::Minimum { min },
    }
}

fn crange(weight: f64, low: f64, high: f64) -> CompoundTarget {
    CompoundTarget {
        weight,
        threshold: Threshold::PreferredRange { low, high },
    }
}

fn targets(entries: &[(&str, CompoundTarget)]) -> BTreeMap<String, CompoundTarget> {
    entries
        .iter()
        .map(|(id, target)| (id.to_string(), *target))
        .collect()
}

fn builtin_profiles() -> BTreeMap<String, SymptomProfile> {
    let list = [
        SymptomProfile {
            key: "need Sleep".to_string(),
            pitch: "Looking for deep, restorative sleep? We have strains designed \
                    to help you drift off and stay asleep."
                .to_string(),
            best_time: "Evening/Bedtime".to_string(),
            onset: "30-60 minutes".to_string(),
            duration: "6-8 hours".to_string(),
            terpene_targets: targets(&[
                ("myrcene", tmin(0.3, 0.005)),
                ("linalool", tmin(0.25, 0.004)),
                ("caryophyllene", tmin(0.15, 0.003)),
            ]),
            cannabinoid_targets: targets(&[
                ("thc_percent", tmin(0.3, 10.0)),
                ("cbn_percent", tmin(0.2, 0.5)),
                ("cbd_percent", crange(0.1, 0.5, 3.0)),
            ]),
            avoid_compounds: vec!["pinene".to_string(), "terpinolene".to_string()],
            preferred_class: Some(StrainClass::Indica),
        },
        SymptomProfile {
            key: "need Pain Relief".to_string(),
            pitch: "Chronic or acute pain getting you down? These strains combine \
                    THC, CBD, and anti-inflammatory terpenes for real relief."
                .to_string(),
            best_time: "Anytime (symptom-dependent)".to_string(),
            onset: "15-45 minutes".to_string(),
            duration: "4-6 hours".to_string(),
            terpene_targets: targets(&[
                ("caryophyllene", tmin(0.35, 0.004)),
                ("myrcene", tmin(0.25, 0.005)),
                ("humulene", tmin(0.15, 0.003)),
            ]),
            cannabinoid_targets: targets(&[
                ("thc_percent", tmin(0.25, 12.0)),
                ("cbd_percent", tmin(0.25, 0.8)),
                ("cbc_percent", tmin(0.1, 0.1)),
            ]),
            avoid_compounds: vec![],
            preferred_class: Some(StrainClass::Indica),
        },
        SymptomProfile {
            key: "need Focus".to_string(),
            pitch: "Need laser focus without the jitters? High-pinene, low-myrcene \
                    strains keep you clear-headed and motivated."
                .to_string(),
            best_time: "Morning/Daytime".to_string(),
            onset: "10-20 minutes".to_string(),
            duration: "3-4 hours".to_string(),
            terpene_targets: targets(&[
                ("pinene", tmin(0.35, 0.003)),
                ("limonene", tmin(0.3, 0.002)),
                ("terpinolene", tmin(0.15, 0.002)),
            ]),
            cannabinoid_targets: targets(&[
                ("thc_percent", crange(0.2, 5.0, 15.0)),
                ("thcv_percent", tmin(0.2, 0.3)),
                ("cbd_percent", crange(0.1, 0.0, 2.0)),
            ]),
            avoid_compounds: vec!["myrcene".to_string()],
            preferred_class: Some(StrainClass::Sativa),
        },
        SymptomProfile {
            key: "need Anxiety Relief".to_string(),
            pitch: "Anxious? These strains feature calming terpenes and CBD to ease \
                    racing thoughts without total sedation."
                .to_string(),
            best_time: "Anytime (as needed)".to_string(),
            onset: "20-40 minutes".to_string(),
            duration: "4-5 hours".to_string(),
            terpene_targets: targets(&[
                ("linalool", tmin(0.3, 0.004)),
                ("limonene", tmin(0.3, 0.003)),
                ("myrcene", tmin(0.15, 0.002)),
            ]),
            cannabinoid_targets: targets(&[
                ("cbd_percent", tmin(0.4, 1.0)),
                // Tolerance zone: the negative weight keeps THC visible in
                // breakdowns without ever rewarding it.
                ("thc_percent", crange(-0.2, 0.0, 12.0)),
                ("cbn_percent", tmin(0.1, 0.2)),
            ]),
            avoid_compounds: vec!["pinene".to_string()],
            preferred_class: Some(StrainClass::Hybrid),
        },
        SymptomProfile {
            key: "need Creativity".to_string(),
            pitch: "Creative block? These strains enhance divergent thinking and \
                    inspiration through unique terpene combinations."
                .to_string(),
            best_time: "Daytime/Afternoon".to_string(),
            onset: "15-30 minutes".to_string(),
            duration: "3-5 hours".to_string(),
            terpene_targets: targets(&[
                ("limonene", tmin(0.3, 0.003)),
                ("terpinolene", tmin(0.25, 0.001)),
                ("ocimene", tmin(0.2, 0.001)),
            ]),
            cannabinoid_targets: targets(&[
                ("thc_percent", crange(0.25, 10.0, 18.0)),
                ("cbd_percent", crange(0.1, 0.0, 2.0)),
                ("thcv_percent", tmin(0.1, 0.2)),
            ]),
            avoid_compounds: vec![],
            preferred_class: Some(StrainClass::Sativa),
        },
        SymptomProfile {
            key: "need Appetite".to_string(),
            pitch: "Lost your appetite? THC + CBG combo triggers hunger signals. \
                    Perfect for medication side effects or recovery."
                .to_string(),
            best_time: "Mealtime".to_string(),
            onset: "20-45 minutes".to_string(),
            duration: "4-6 hours".to_string(),
            terpene_targets: targets(&[
                ("myrcene", tmin(0.3, 0.005)),
                ("caryophyllene", tmin(0.2, 0.003)),
            ]),
            cannabinoid_targets: targets(&[
                ("thc_percent", tmin(0.35, 12.0)),
                ("cbg_percent", tmin(0.25, 0.3)),
                ("cbd_percent", crange(0.1, 0.0, 1.0)),
            ]),
            // Humulene suppresses appetite; penalize significant presence.
            avoid_compounds: vec!["humulene".to_string()],
            preferred_class: Some(StrainClass::Indica),
        },
    ];

    list.into_iter().map(|p| (p.key.clone(), p)).collect()
}
