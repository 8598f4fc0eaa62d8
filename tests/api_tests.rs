// Integration tests for the churn prediction API
//
// Drives the real router with a stub model so every endpoint contract can be
// checked without a model artifact on disk.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use churn_api::features::FeatureVector;
use churn_api::inference::{ChurnModel, InferenceError, ModelMetadata, ModelOutput};
use churn_api::{create_router, AppState, Config};

/// Deterministic stand-in for the ONNX session.
struct StubModel {
    churn_probability: f32,
    fail_with: Option<String>,
    metadata: ModelMetadata,
}

impl StubModel {
    fn new(churn_probability: f32) -> Self {
        Self {
            churn_probability,
            fail_with: None,
            metadata: ModelMetadata {
                model_path: "stub".to_string(),
                model_type: "StubModel".to_string(),
                feature_count: 30,
                loaded_at: chrono::Utc::now(),
            },
        }
    }

    fn failing(message: &str) -> Self {
        let mut stub = Self::new(0.5);
        stub.fail_with = Some(message.to_string());
        stub
    }
}

impl ChurnModel for StubModel {
    fn predict(&self, _features: &FeatureVector) -> Result<ModelOutput, InferenceError> {
        if let Some(message) = &self.fail_with {
            return Err(InferenceError(message.clone()));
        }
        Ok(ModelOutput {
            label: if self.churn_probability > 0.5 { 1 } else { 0 },
            stay_probability: 1.0 - self.churn_probability,
            churn_probability: self.churn_probability,
        })
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

fn app(model: StubModel) -> Router {
    let state = AppState {
        model: Arc::new(model),
        config: Config {
            model_path: "stub".to_string(),
            port: 0,
        },
    };
    create_router(state)
}

fn customer() -> Value {
    json!({
        "tenure": -0.101157,
        "MonthlyCharges": -1.502549,
        "TotalCharges": -0.722456,
        "gender_Male": 1,
        "Partner_Yes": 0,
        "Dependents_Yes": 1,
        "PhoneService_Yes": 0,
        "MultipleLines_No_phone_service": 0,
        "MultipleLines_Yes": 1,
        "InternetService_Fiber_optic": 0,
        "InternetService_No": 1,
        "OnlineSecurity_No_internet_service": 0,
        "OnlineSecurity_Yes": 1,
        "OnlineBackup_No_internet_service": 0,
        "OnlineBackup_Yes": 1,
        "DeviceProtection_No_internet_service": 0,
        "DeviceProtection_Yes": 1,
        "TechSupport_No_internet_service": 0,
        "TechSupport_Yes": 1,
        "StreamingTV_No_internet_service": 0,
        "StreamingTV_Yes": 1,
        "StreamingMovies_No_internet_service": 0,
        "StreamingMovies_Yes": 1,
        "Contract_One_year": 0,
        "Contract_Two_year": 1,
        "PaperlessBilling_Yes": 0,
        "PaymentMethod_Credit_card": 1,
        "PaymentMethod_Electronic_check": 0,
        "PaymentMethod_Mailed_check": 1,
        "SeniorCitizen_1": 0
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn home_returns_service_metadata() {
    let (status, body) = get(app(StubModel::new(0.3)), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Churn Prediction API");
    assert_eq!(body["model"], "StubModel");
    assert_eq!(body["endpoints"]["predict"], "/predict");
    assert_eq!(body["endpoints"]["health"], "/health");
    assert!(body["version"].as_str().is_some());
}

#[tokio::test]
async fn health_reports_model_loaded() {
    let (status, body) = get(app(StubModel::new(0.3)), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], true);
    assert_eq!(body["model_type"], "StubModel");
}

#[tokio::test]
async fn predict_valid_record() {
    let (status, body) = post(app(StubModel::new(0.85)), "/predict", &customer()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["prediction"], "WILL CHURN");
    assert_eq!(body["risk_level"], "HIGH");
    assert_eq!(body["confidence"], "High");

    let churn = body["churn_probability"].as_f64().unwrap();
    let stay = body["stay_probability"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&churn));
    assert!((churn + stay - 1.0).abs() < 1e-4);
}

#[tokio::test]
async fn predict_low_probability_is_stay() {
    let (status, body) = post(app(StubModel::new(0.1)), "/predict", &customer()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], "WILL STAY");
    assert_eq!(body["risk_level"], "LOW");
    assert_eq!(body["confidence"], "High"); // stay probability 0.9 wins
}

#[tokio::test]
async fn predict_rounds_probabilities_to_4_places() {
    let (_, body) = post(app(StubModel::new(0.856_789_4)), "/predict", &customer()).await;
    let churn = body["churn_probability"].as_f64().unwrap();
    assert!((churn - 0.8568).abs() < 1e-9);
}

#[tokio::test]
async fn predict_rejects_out_of_set_binary_field() {
    let mut payload = customer();
    payload["gender_Male"] = json!(2);
    let (status, body) = post(app(StubModel::new(0.5)), "/predict", &payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0]["field"], "gender_Male");
    assert!(detail[0]["message"]
        .as_str()
        .unwrap()
        .starts_with("must be 0 or 1"));
}

#[tokio::test]
async fn predict_rejects_missing_field() {
    let mut payload = customer();
    payload.as_object_mut().unwrap().remove("tenure");
    let (status, body) = post(app(StubModel::new(0.5)), "/predict", &payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["field"], "tenure");
    assert_eq!(body["detail"][0]["message"], "field required");
}

#[tokio::test]
async fn predict_reports_every_failing_field() {
    let mut payload = customer();
    payload["tenure"] = json!("invalid");
    payload["Partner_Yes"] = json!(-1);
    payload.as_object_mut().unwrap().remove("SeniorCitizen_1");
    let (status, body) = post(app(StubModel::new(0.5)), "/predict", &payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["tenure", "Partner_Yes", "SeniorCitizen_1"]);
}

#[tokio::test]
async fn predict_surfaces_model_failure_as_500() {
    let (status, body) = post(app(StubModel::failing("boom")), "/predict", &customer()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Prediction failed: boom");
}

#[tokio::test]
async fn batch_predicts_in_submission_order() {
    let payload = json!({ "customers": [customer(), customer(), customer()] });
    let (status, body) = post(app(StubModel::new(0.9)), "/predict/batch", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_customers"], 3);

    let predictions = body["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 3);
    for (i, entry) in predictions.iter().enumerate() {
        assert_eq!(entry["customer_index"], i as u64);
        assert!(entry.get("confidence").is_none());
    }

    let summary = &body["summary"];
    let will_churn = summary["will_churn"].as_u64().unwrap();
    let will_stay = summary["will_stay"].as_u64().unwrap();
    assert_eq!(will_churn + will_stay, 3);
    assert_eq!(summary["high_risk"], 3);
}

#[tokio::test]
async fn batch_fails_whole_request_on_one_bad_record() {
    let mut bad = customer();
    bad["Dependents_Yes"] = json!(5);
    let payload = json!({ "customers": [customer(), bad] });
    let (status, body) = post(app(StubModel::new(0.5)), "/predict/batch", &payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["field"], "customers[1].Dependents_Yes");
}

#[tokio::test]
async fn batch_requires_customers_array() {
    let (status, body) = post(app(StubModel::new(0.5)), "/predict/batch", &json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["field"], "customers");
}

#[tokio::test]
async fn batch_with_no_customers_succeeds() {
    let payload = json!({ "customers": [] });
    let (status, body) = post(app(StubModel::new(0.5)), "/predict/batch", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_customers"], 0);
    assert_eq!(body["summary"]["will_churn"], 0);
    assert_eq!(body["summary"]["will_stay"], 0);
    assert_eq!(body["summary"]["high_risk"], 0);
}

#[tokio::test]
async fn batch_surfaces_model_failure_as_500() {
    let payload = json!({ "customers": [customer()] });
    let (status, body) = post(app(StubModel::failing("shape mismatch")), "/predict/batch", &payload).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Prediction failed: shape mismatch");
}
