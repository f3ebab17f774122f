//! StrainMatch - chemistry-based strain recommendation engine
//!
//! Scores cannabis strains against weighted chemical-profile targets and
//! ranks the best matches for a stated need ("need Sleep", "need Focus").
//!
//! - `compounds`: static reference table for tracked terpenes/cannabinoids
//! - `profiles`: curated symptom profiles, validated at startup
//! - `data`: strain catalog loading with Polars
//! - `scoring/`: individual scoring components
//! - `scorer`: the match-scoring coordinator
//! - `ranking`: top-N recommendation over a catalog
//! - `search`: browse-side filtering and sorting

pub mod compounds;
pub mod data;
pub mod error;
pub mod explanation;
pub mod profiles;
pub mod ranking;
pub mod scorer;
pub mod scoring;
pub mod search;

// Re-export commonly used types
pub use data::{StrainCatalog, StrainClass, StrainRecord};
pub use error::{RecommendError, RegistryError};
pub use explanation::{CompoundAssessment, CompoundStatus, Explanation, MatchResult, TargetBand};
pub use profiles::{CompoundTarget, SymptomProfile, SymptomRegistry, Threshold};
pub use ranking::{recommend, recommend_parallel, RankedStrain};
pub use scorer::score;
pub use search::{filter_by_class, filter_by_name, sort_strains, SortKey};
