//! ONNX Runtime integration
//!
//! Loads the exported classifier once at startup and runs single-row
//! inference. The artifact is exported with two outputs: the class label
//! (`i64`) and the per-class probability tensor (`f32`, `[p_stay, p_churn]`,
//! zipmap disabled), bound by position at load time.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::{ChurnModel, InferenceError, ModelMetadata, ModelOutput};
use crate::features::{FeatureVector, FEATURE_COUNT};

/// Churn classifier backed by an ONNX Runtime session.
///
/// `Session::run` takes `&mut self`, so the session sits behind a mutex and
/// concurrent requests serialize on the inference call itself.
pub struct OnnxChurnModel {
    session: Mutex<Session>,
    label_output: String,
    proba_output: String,
    metadata: ModelMetadata,
}

impl OnnxChurnModel {
    /// Load the model artifact. Any failure here is fatal at startup.
    pub fn load(model_path: &str) -> Result<Self, InferenceError> {
        tracing::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(InferenceError(format!("Model not found: {}", model_path)));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

        if session.outputs.len() < 2 {
            return Err(InferenceError(format!(
                "Model must expose label and probability outputs, found {}",
                session.outputs.len()
            )));
        }
        let label_output = session.outputs[0].name.clone();
        let proba_output = session.outputs[1].name.clone();

        tracing::info!(
            "ONNX model loaded (outputs: {}, {})",
            label_output,
            proba_output
        );

        let metadata = ModelMetadata {
            model_path: model_path.to_string(),
            model_type: "OnnxChurnModel".to_string(),
            feature_count: FEATURE_COUNT,
            loaded_at: chrono::Utc::now(),
        };

        Ok(Self {
            session: Mutex::new(session),
            label_output,
            proba_output,
            metadata,
        })
    }
}

impl ChurnModel for OnnxChurnModel {
    fn predict(&self, features: &FeatureVector) -> Result<ModelOutput, InferenceError> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.as_slice().to_vec())
            .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let label_value = outputs
            .get(&self.label_output)
            .ok_or_else(|| InferenceError(format!("Missing output {}", self.label_output)))?;
        let label_tensor = label_value
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;
        let label = label_tensor
            .1
            .first()
            .copied()
            .ok_or_else(|| InferenceError("Empty label output".to_string()))?;

        let proba_value = outputs
            .get(&self.proba_output)
            .ok_or_else(|| InferenceError(format!("Missing output {}", self.proba_output)))?;
        let proba_tensor = proba_value
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;
        let probs = proba_tensor.1;

        if probs.len() < 2 {
            return Err(InferenceError(format!(
                "Expected two class probabilities, got {}",
                probs.len()
            )));
        }

        Ok(ModelOutput {
            label,
            stay_probability: probs[0],
            churn_probability: probs[1],
        })
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}
