//! Browse-side filtering and sorting, independent of scoring.

use crate::data::{StrainClass, StrainRecord};

/// Case-insensitive substring match on strain name. An empty query returns
/// the full collection.
pub fn filter_by_name<'a>(strains: &'a [StrainRecord], query: &str) -> Vec<&'a StrainRecord> {
    if query.is_empty() {
        return strains.iter().collect();
    }
    let query_lower = query.to_lowercase();
    strains
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&query_lower))
        .collect()
}

/// Keep only strains of one class.
pub fn filter_by_class<'a>(
    strains: &'a [StrainRecord],
    class: StrainClass,
) -> Vec<&'a StrainRecord> {
    strains
        .iter()
        .filter(|s| s.strain_class == class)
        .collect()
}

/// Browse sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Name A-Z.
    Name,
    /// THC high to low.
    ThcDescending,
    /// CBD high to low.
    CbdDescending,
}

/// Sort a filtered view in place.
pub fn sort_strains(strains: &mut [&StrainRecord], key: SortKey) {
    match key {
        SortKey::Name => strains.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::ThcDescending => {
            strains.sort_by(|a, b| b.value("thc_percent").total_cmp(&a.value("thc_percent")))
        }
        SortKey::CbdDescending => {
            strains.sort_by(|a, b| b.value("cbd_percent").total_cmp(&a.value("cbd_percent")))
        }
    }
}
