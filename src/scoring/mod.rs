//! Scoring components
//!
//! Each scoring concern lives in its own module and returns a typed result
//! carrying its raw-score contribution, its share of the best-case
//! denominator, and whatever breakdown it produced. The coordinator in
//! `crate::scorer` runs them in order and normalizes.

pub mod cannabinoid_targets;
pub mod entourage;
pub mod terpene_targets;

pub use cannabinoid_targets::{score_cannabinoid_targets, CannabinoidTargetScore};
pub use entourage::{
    score_entourage, score_terpene_richness, EntourageScore, RichnessBonus, PAIR_RULES,
};
pub use terpene_targets::{
    apply_avoid_penalties, score_terpene_targets, AvoidPenalty, TerpeneTargetScore,
};
