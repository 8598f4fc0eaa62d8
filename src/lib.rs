//! Churn Prediction API
//!
//! Serves a pre-trained customer churn classifier over HTTP:
//! schema validation of the 30-field customer record, deterministic mapping
//! into the training-time feature vector, ONNX inference, and risk/confidence
//! labeling of the raw probabilities.

pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod inference;
pub mod models;
pub mod risk;

pub use config::Config;
pub use error::{AppError, AppResult};

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use inference::ChurnModel;

/// Shared application state
///
/// The model is an injected dependency rather than a module-level singleton
/// so tests can substitute a stub.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ChurnModel>,
    pub config: Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::meta::home))
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::predict::predict))
        .route("/predict/batch", post(handlers::predict::predict_batch))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
