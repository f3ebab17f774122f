//! ENTOURAGE AND RICHNESS BONUSES
//!
//! Fixed, profile-independent bonus rules. Six compound-pair rules model
//! documented entourage synergies; each adds its weight to the best-case
//! denominator unconditionally and to the raw score only when both
//! thresholds hold. The terpene-richness bonus rewards overall terpene
//! content in two tiers against a single 8-point denominator slot.

use crate::data::StrainRecord;

/// One entourage pair rule: both compounds must exceed their thresholds.
#[derive(Debug)]
pub struct PairRule {
    pub first: (&'static str, f64),
    pub second: (&'static str, f64),
    pub weight: f64,
    pub note: &'static str,
}

pub static PAIR_RULES: &[PairRule] = &[
    PairRule {
        first: ("thc_percent", 10.0),
        second: ("cbd_percent", 0.5),
        weight: 8.0,
        note: "THC+CBD entourage (anxiety reduction)",
    },
    PairRule {
        first: ("thc_percent", 12.0),
        second: ("myrcene", 0.005),
        weight: 7.0,
        note: "THC+Myrcene entourage (sedation boost)",
    },
    PairRule {
        first: ("cbd_percent", 1.0),
        second: ("caryophyllene", 0.004),
        weight: 10.0,
        note: "CBD+Caryophyllene (anti-inflammatory power)",
    },
    PairRule {
        first: ("limonene", 0.003),
        second: ("linalool", 0.004),
        weight: 6.0,
        note: "Limonene+Linalool (calm + uplift)",
    },
    PairRule {
        first: ("cbg_percent", 0.3),
        second: ("cbc_percent", 0.15),
        weight: 5.0,
        note: "CBG+CBC (brain health synergy)",
    },
    PairRule {
        first: ("thc_percent", 15.0),
        second: ("pinene", 0.003),
        weight: 4.0,
        note: "THC+Pinene (counteracts memory loss)",
    },
];

/// Total terpene content above this earns the full richness bonus.
pub const RICH_TERPENES: f64 = 0.02;
/// Above this (but not rich) earns the half bonus.
pub const GOOD_TERPENES: f64 = 0.01;
/// Denominator slot for the richness bonus, regardless of tier reached.
pub const RICHNESS_MAX: f64 = 8.0;

/// Result of evaluating the entourage pair rules.
#[derive(Debug)]
pub struct EntourageScore {
    pub contribution: f64,
    pub max_possible: f64,
    /// One note per satisfied rule, in table order.
    pub notes: Vec<String>,
}

/// Evaluate all entourage pair rules against one strain.
pub fn score_entourage(strain: &StrainRecord) -> EntourageScore {
    let mut contribution = 0.0;
    let mut max_possible = 0.0;
    let mut notes = Vec::new();

    for rule in PAIR_RULES {
        max_possible += rule.weight;
        if strain.value(rule.first.0) > rule.first.1 && strain.value(rule.second.0) > rule.second.1
        {
            contribution += rule.weight;
            notes.push(rule.note.to_string());
        }
    }

    EntourageScore {
        contribution,
        max_possible,
        notes,
    }
}

/// Result of the terpene-richness bonus.
#[derive(Debug)]
pub struct RichnessBonus {
    pub contribution: f64,
    pub max_possible: f64,
    pub note: Option<String>,
}

/// Tiered bonus on a strain's total terpene content.
pub fn score_terpene_richness(strain: &StrainRecord) -> RichnessBonus {
    let total = strain.total_terpenes;
    let (contribution, note) = if total > RICH_TERPENES {
        (
            RICHNESS_MAX,
            Some(format!("Rich terpene profile ({:.2}% total)", total * 100.0)),
        )
    } else if total > GOOD_TERPENES {
        (
            RICHNESS_MAX / 2.0,
            Some(format!("Good terpene content ({:.2}%)", total * 100.0)),
        )
    } else {
        (0.0, None)
    };

    RichnessBonus {
        contribution,
        max_possible: RICHNESS_MAX,
        note,
    }
}
