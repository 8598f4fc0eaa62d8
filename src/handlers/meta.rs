//! Service metadata handler

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn home(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Churn Prediction API",
        "model": state.model.metadata().model_type,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "predict": "/predict",
            "predict_batch": "/predict/batch",
            "health": "/health"
        }
    }))
}
