//! Churn Prediction API server
//!
//! Loads the ONNX churn classifier once at startup (a missing or unreadable
//! artifact aborts the process) and serves the prediction endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use churn_api::inference::{ChurnModel, OnnxChurnModel};
use churn_api::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "churn_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Churn Prediction API starting...");

    // Load the model once; fatal if the artifact is missing or unreadable
    let model = OnnxChurnModel::load(&config.model_path)
        .with_context(|| format!("failed to load model from {}", config.model_path))?;
    tracing::info!("Model ready: {}", model.metadata().model_type);

    // Build application state
    let state = AppState {
        model: Arc::new(model),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
