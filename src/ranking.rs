//! Ranking Service
//!
//! Scores every strain in a collection against one symptom profile and
//! returns the top matches. Scoring is independent per strain, so the
//! parallel variant is a plain Rayon map; both variants produce identical
//! output (stable descending sort, ties keep collection order).

use crate::data::StrainRecord;
use crate::error::RecommendError;
use crate::explanation::MatchResult;
use crate::profiles::{SymptomProfile, SymptomRegistry};
use crate::scorer::score;
use rayon::prelude::*;

/// One ranked entry: the catalog record plus its match result.
#[derive(Debug)]
pub struct RankedStrain<'a> {
    pub strain: &'a StrainRecord,
    pub result: MatchResult,
}

/// Score every strain against the profile registered for `symptom_key` and
/// return at most `top_n` entries, best first.
///
/// An unknown key is an error, never a silent fallback. An empty collection
/// returns an empty Vec.
pub fn recommend<'a>(
    registry: &SymptomRegistry,
    symptom_key: &str,
    strains: &'a [StrainRecord],
    top_n: usize,
) -> Result<Vec<RankedStrain<'a>>, RecommendError> {
    let profile = lookup_profile(registry, symptom_key)?;
    let results: Vec<MatchResult> = strains.iter().map(|s| score(s, profile)).collect();
    Ok(rank(strains, results, top_n))
}

/// Parallel variant of [`recommend`]; identical output ordering.
pub fn recommend_parallel<'a>(
    registry: &SymptomRegistry,
    symptom_key: &str,
    strains: &'a [StrainRecord],
    top_n: usize,
) -> Result<Vec<RankedStrain<'a>>, RecommendError> {
    let profile = lookup_profile(registry, symptom_key)?;
    let results: Vec<MatchResult> = strains.par_iter().map(|s| score(s, profile)).collect();
    Ok(rank(strains, results, top_n))
}

fn lookup_profile<'r>(
    registry: &'r SymptomRegistry,
    symptom_key: &str,
) -> Result<&'r SymptomProfile, RecommendError> {
    registry
        .get(symptom_key)
        .ok_or_else(|| RecommendError::ProfileNotFound(symptom_key.to_string()))
}

/// Pair results with their records, sort best-first, truncate.
fn rank<'a>(
    strains: &'a [StrainRecord],
    results: Vec<MatchResult>,
    top_n: usize,
) -> Vec<RankedStrain<'a>> {
    let mut ranked: Vec<RankedStrain<'a>> = strains
        .iter()
        .zip(results)
        .map(|(strain, result)| RankedStrain { strain, result })
        .collect();

    // Stable sort: equal scores keep collection order.
    ranked.sort_by(|a, b| b.result.score.total_cmp(&a.result.score));
    ranked.truncate(top_n);
    ranked
}
