//! Model inference
//!
//! The classifier is a black box behind the [`ChurnModel`] trait: one call
//! produces the class label and both class probabilities. The trait seam
//! exists so handlers can be exercised against a stub model in tests.

pub mod onnx;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::FeatureVector;

pub use onnx::OnnxChurnModel;

/// Failure inside the model call (shape mismatch, runtime fault).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct InferenceError(pub String);

/// Raw classifier output for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    /// 1 = will churn, 0 = will stay
    pub label: i64,
    pub stay_probability: f32,
    pub churn_probability: f32,
}

/// Descriptive info about the loaded model, fixed at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub model_type: String,
    pub feature_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// A loaded, read-only churn classifier.
pub trait ChurnModel: Send + Sync {
    /// Score one feature vector. Never retried: the same vector would fail
    /// the same way.
    fn predict(&self, features: &FeatureVector) -> Result<ModelOutput, InferenceError>;

    fn metadata(&self) -> &ModelMetadata;
}
