//! Compound Reference Table
//!
//! Static metadata for every terpene and cannabinoid the matcher tracks.
//! Strain records and symptom profiles share one flat namespace of compound
//! ids; this table is the authority on which ids exist, which domain each
//! belongs to, and how to present them.
//!
//! Terpene fractions and cannabinoid percentages keep their lab-report
//! units: terpenes as mass fractions (0.01 = 1%), cannabinoids as whole
//! percentages (18.0 = 18%).

use serde::{Deserialize, Serialize};

/// Domain of a tracked compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundKind {
    Terpene,
    Cannabinoid,
}

/// Reference metadata for one compound.
#[derive(Debug, Clone)]
pub struct CompoundInfo {
    /// Flat-namespace key, matching the catalog column name.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    pub kind: CompoundKind,
    /// Aroma notes for terpenes, one-line description for cannabinoids.
    pub blurb: &'static str,
    /// Effect tags for presentation layers.
    pub effects: &'static [&'static str],
}

/// Presence above this value (in strain-measurement units) counts as
/// significant for avoid-compound penalties.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.005;

// ============================================================================
// EMBEDDED COMPOUND DATA
// ============================================================================

pub static COMPOUNDS: &[CompoundInfo] = &[
    // Terpenes (mass fractions)
    CompoundInfo {
        id: "myrcene",
        name: "Myrcene",
        kind: CompoundKind::Terpene,
        blurb: "Earthy, musky, herbal, mango",
        effects: &["Sedating", "Muscle Relaxant", "Anti-inflammatory"],
    },
    CompoundInfo {
        id: "limonene",
        name: "Limonene",
        kind: CompoundKind::Terpene,
        blurb: "Citrus, lemon, orange, fresh",
        effects: &["Mood Elevation", "Stress Relief", "Energizing"],
    },
    CompoundInfo {
        id: "caryophyllene",
        name: "β-Caryophyllene",
        kind: CompoundKind::Terpene,
        blurb: "Spicy, peppery, woody, clove",
        effects: &["Anti-inflammatory", "Pain Relief", "Stress Relief"],
    },
    CompoundInfo {
        id: "linalool",
        name: "Linalool",
        kind: CompoundKind::Terpene,
        blurb: "Floral, lavender, sweet",
        effects: &["Calming", "Anti-anxiety", "Sedative"],
    },
    CompoundInfo {
        id: "pinene",
        name: "α-Pinene",
        kind: CompoundKind::Terpene,
        blurb: "Pine, fresh, sharp, forest",
        effects: &["Alertness", "Memory Retention", "Bronchodilator"],
    },
    CompoundInfo {
        id: "humulene",
        name: "Humulene",
        kind: CompoundKind::Terpene,
        blurb: "Earthy, woody, hoppy",
        effects: &["Anti-inflammatory", "Appetite Suppressant"],
    },
    CompoundInfo {
        id: "terpinolene",
        name: "Terpinolene",
        kind: CompoundKind::Terpene,
        blurb: "Floral, herbal, piney, sweet",
        effects: &["Uplifting", "Antioxidant"],
    },
    CompoundInfo {
        id: "ocimene",
        name: "Ocimene",
        kind: CompoundKind::Terpene,
        blurb: "Sweet, herbal, woody, citrus",
        effects: &["Uplifting", "Decongestant"],
    },
    // Cannabinoids (whole percentages)
    CompoundInfo {
        id: "thc_percent",
        name: "THC",
        kind: CompoundKind::Cannabinoid,
        blurb: "Main psychoactive compound",
        effects: &["Euphoria", "Relaxation", "Appetite stimulation"],
    },
    CompoundInfo {
        id: "cbd_percent",
        name: "CBD",
        kind: CompoundKind::Cannabinoid,
        blurb: "Non-intoxicating, modulates THC",
        effects: &["Anti-anxiety", "Anti-inflammatory", "Neuroprotective"],
    },
    CompoundInfo {
        id: "cbn_percent",
        name: "CBN",
        kind: CompoundKind::Cannabinoid,
        blurb: "Sedative cannabinoid formed as THC ages",
        effects: &["Sedation", "Sleep aid", "Pain relief"],
    },
    CompoundInfo {
        id: "cbg_percent",
        name: "CBG",
        kind: CompoundKind::Cannabinoid,
        blurb: "Precursor cannabinoid, appetite trigger",
        effects: &["Appetite stimulation", "Antibacterial", "Neuroprotective"],
    },
    CompoundInfo {
        id: "thcv_percent",
        name: "THCV",
        kind: CompoundKind::Cannabinoid,
        blurb: "Fast onset, short duration, energizing",
        effects: &["Energy", "Appetite suppression", "Clear-headed"],
    },
    CompoundInfo {
        id: "cbc_percent",
        name: "CBC",
        kind: CompoundKind::Cannabinoid,
        blurb: "Non-intoxicating, supports neurogenesis",
        effects: &["Anti-inflammatory", "Antidepressant", "Pain relief"],
    },
    CompoundInfo {
        id: "cbdv_percent",
        name: "CBDV",
        kind: CompoundKind::Cannabinoid,
        blurb: "CBD's propyl analog, anticonvulsant",
        effects: &["Anticonvulsant", "Anti-nausea"],
    },
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Look up reference metadata by compound id.
pub fn lookup(id: &str) -> Option<&'static CompoundInfo> {
    COMPOUNDS.iter().find(|c| c.id == id)
}

/// True if the id names a tracked compound.
pub fn is_known(id: &str) -> bool {
    lookup(id).is_some()
}

/// Canonical terpene ids, in table order. Derived strain fields (total
/// terpene content, dominant terpene) sum and scan exactly this list.
pub fn terpene_ids() -> impl Iterator<Item = &'static str> {
    COMPOUNDS
        .iter()
        .filter(|c| c.kind == CompoundKind::Terpene)
        .map(|c| c.id)
}

/// Canonical cannabinoid ids, in table order.
pub fn cannabinoid_ids() -> impl Iterator<Item = &'static str> {
    COMPOUNDS
        .iter()
        .filter(|c| c.kind == CompoundKind::Cannabinoid)
        .map(|c| c.id)
}
