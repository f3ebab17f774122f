//! Match result and explanation types.
//!
//! Every score comes back with a structured breakdown: one assessment per
//! profiled compound plus the bonus/penalty notes that moved the raw score.
//! API layers marshal these straight to JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a strain's measured value sits against one compound target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundStatus {
    /// At or above a minimum threshold.
    Excellent,
    /// Between half the minimum and the minimum (linear partial credit).
    Partial,
    /// Below the credited band, or below a preferred range.
    Low,
    /// Inside a preferred range.
    Optimal,
    /// Above a preferred range.
    High,
}

/// The target band a value was assessed against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetBand {
    /// Minimum-threshold target.
    AtLeast(f64),
    /// Preferred-range target (low, high).
    Between(f64, f64),
}

/// Assessment of one compound against its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundAssessment {
    pub status: CompoundStatus,
    /// Observed value on the strain (0 when the compound is absent).
    pub value: f64,
    pub target: TargetBand,
}

/// Structured breakdown behind a match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    /// Per-terpene assessments, keyed by compound id.
    pub terpenes: BTreeMap<String, CompoundAssessment>,
    /// Per-cannabinoid assessments, keyed by compound id.
    pub cannabinoids: BTreeMap<String, CompoundAssessment>,
    /// Human-readable bonus and penalty notes, in scoring order.
    pub notes: Vec<String>,
    /// Accumulated raw score before normalization. Penalties can push this
    /// negative; the normalized score never shows it.
    pub raw_score: f64,
    /// Accumulated best-case score for the same profile.
    pub max_possible: f64,
}

/// Result of scoring one strain against one symptom profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Name of the strain scored (names are not required unique; ranking
    /// keeps the record reference alongside).
    pub strain_name: String,
    /// Normalized match score in [0, 100].
    pub score: f64,
    pub explanation: Explanation,
}

impl MatchResult {
    /// Qualitative label for a score, as shown on recommendation cards.
    pub fn label(&self) -> &'static str {
        if self.score >= 80.0 {
            "Excellent match"
        } else if self.score >= 60.0 {
            "Good match"
        } else {
            "Fair match"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_score(score: f64) -> MatchResult {
        MatchResult {
            strain_name: "Test".to_string(),
            score,
            explanation: Explanation {
                terpenes: BTreeMap::new(),
                cannabinoids: BTreeMap::new(),
                notes: vec![],
                raw_score: 0.0,
                max_possible: 0.0,
            },
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(result_with_score(92.0).label(), "Excellent match");
        assert_eq!(result_with_score(80.0).label(), "Excellent match");
        assert_eq!(result_with_score(60.0).label(), "Good match");
        assert_eq!(result_with_score(59.9).label(), "Fair match");
    }

    #[test]
    fn test_serializes_to_json() {
        let mut terpenes = BTreeMap::new();
        terpenes.insert(
            "myrcene".to_string(),
            CompoundAssessment {
                status: CompoundStatus::Excellent,
                value: 0.01,
                target: TargetBand::AtLeast(0.005),
            },
        );
        let result = MatchResult {
            strain_name: "Granddaddy Purple".to_string(),
            score: 88.9,
            explanation: Explanation {
                terpenes,
                cannabinoids: BTreeMap::new(),
                notes: vec!["Indica genetics (preferred)".to_string()],
                raw_score: 171.5,
                max_possible: 193.0,
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["strain_name"], "Granddaddy Purple");
        assert_eq!(
            json["explanation"]["terpenes"]["myrcene"]["status"],
            "excellent"
        );
    }
}
