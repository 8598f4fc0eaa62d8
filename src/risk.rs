//! Risk and confidence derivation
//!
//! Pure threshold functions over the raw churn probability. Thresholds are
//! strict `>`: a probability of exactly 0.7 is MEDIUM, exactly 0.4 is LOW.

use serde::Serialize;

/// Coarse churn-risk bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
}

impl RiskLevel {
    pub fn from_probability(churn_probability: f64) -> Self {
        if churn_probability > 0.7 {
            RiskLevel::High
        } else if churn_probability > 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// How decisive the classifier was, from the winning class probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_probabilities(stay_probability: f64, churn_probability: f64) -> Self {
        let top = stay_probability.max(churn_probability);
        if top > 0.8 {
            Confidence::High
        } else if top > 0.6 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
