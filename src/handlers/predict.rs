//! Prediction handlers
//!
//! Both endpoints take the raw JSON value so the schema validator can report
//! every failing field at once; typed deserialization happens only after the
//! payload has passed.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::{AppError, AppResult, FieldError};
use crate::features::FeatureVector;
use crate::models::{
    BatchPredictionResponse, BatchSummary, CustomerPrediction, CustomerRecord, PredictionResponse,
};
use crate::AppState;

/// Single-record prediction: validate, vectorize, score, shape.
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<PredictionResponse>> {
    let record = CustomerRecord::from_json(&payload)?;
    let features = FeatureVector::from_record(&record);
    let output = state.model.predict(&features)?;

    tracing::debug!(
        churn_probability = output.churn_probability,
        "prediction complete"
    );

    Ok(Json(PredictionResponse::from_output(&output)))
}

/// Batch prediction: every record is validated before any inference runs,
/// and one malformed record fails the whole batch. Inference is sequential
/// in submission order.
pub async fn predict_batch(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<BatchPredictionResponse>> {
    let customers = parse_batch(&payload)?;

    let mut predictions = Vec::with_capacity(customers.len());
    for (index, record) in customers.iter().enumerate() {
        let features = FeatureVector::from_record(record);
        let output = state.model.predict(&features)?;
        predictions.push(CustomerPrediction::from_output(index, &output));
    }

    let summary = BatchSummary::tally(&predictions);
    tracing::debug!(
        total = predictions.len(),
        will_churn = summary.will_churn,
        "batch prediction complete"
    );

    Ok(Json(BatchPredictionResponse {
        success: true,
        total_customers: predictions.len(),
        predictions,
        summary,
    }))
}

fn parse_batch(payload: &Value) -> Result<Vec<CustomerRecord>, AppError> {
    let Some(map) = payload.as_object() else {
        return Err(AppError::Validation(vec![FieldError::new(
            "body",
            "expected a JSON object",
        )]));
    };
    let Some(customers) = map.get("customers").and_then(Value::as_array) else {
        return Err(AppError::Validation(vec![FieldError::new(
            "customers",
            "field required and must be an array",
        )]));
    };

    let mut records = Vec::with_capacity(customers.len());
    let mut errors = Vec::new();
    for (index, value) in customers.iter().enumerate() {
        match CustomerRecord::from_json(value) {
            Ok(record) => records.push(record),
            Err(errs) => errors.extend(errs.into_iter().map(|e| e.indexed(index))),
        }
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(records)
}
