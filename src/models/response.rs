//! Response shaping
//!
//! Turns raw model output into the wire payloads. Probabilities are rounded
//! to 4 decimal places for display; risk and confidence are derived from the
//! unrounded values.

use serde::Serialize;

use crate::inference::ModelOutput;
use crate::risk::{Confidence, RiskLevel};

pub const WILL_CHURN: &str = "WILL CHURN";
pub const WILL_STAY: &str = "WILL STAY";

fn prediction_label(label: i64) -> &'static str {
    if label == 1 {
        WILL_CHURN
    } else {
        WILL_STAY
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Single-record prediction payload.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub success: bool,
    pub prediction: &'static str,
    pub churn_probability: f64,
    pub stay_probability: f64,
    pub risk_level: RiskLevel,
    pub confidence: Confidence,
}

impl PredictionResponse {
    pub fn from_output(output: &ModelOutput) -> Self {
        let churn = output.churn_probability as f64;
        let stay = output.stay_probability as f64;
        Self {
            success: true,
            prediction: prediction_label(output.label),
            churn_probability: round4(churn),
            stay_probability: round4(stay),
            risk_level: RiskLevel::from_probability(churn),
            confidence: Confidence::from_probabilities(stay, churn),
        }
    }
}

/// One entry of a batch response. No confidence on the batch path.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerPrediction {
    pub customer_index: usize,
    pub prediction: &'static str,
    pub churn_probability: f64,
    pub stay_probability: f64,
    pub risk_level: RiskLevel,
}

impl CustomerPrediction {
    pub fn from_output(customer_index: usize, output: &ModelOutput) -> Self {
        let churn = output.churn_probability as f64;
        Self {
            customer_index,
            prediction: prediction_label(output.label),
            churn_probability: round4(churn),
            stay_probability: round4(output.stay_probability as f64),
            risk_level: RiskLevel::from_probability(churn),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub will_churn: usize,
    pub will_stay: usize,
    pub high_risk: usize,
}

impl BatchSummary {
    /// Tally over the per-record results, not recomputed from probabilities.
    pub fn tally(predictions: &[CustomerPrediction]) -> Self {
        Self {
            will_churn: predictions.iter().filter(|p| p.prediction == WILL_CHURN).count(),
            will_stay: predictions.iter().filter(|p| p.prediction == WILL_STAY).count(),
            high_risk: predictions
                .iter()
                .filter(|p| p.risk_level == RiskLevel::High)
                .count(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchPredictionResponse {
    pub success: bool,
    pub total_customers: usize,
    pub predictions: Vec<CustomerPrediction>,
    pub summary: BatchSummary,
}

// ============================================================================
// TESTS
// ============================================================================
