//! Thin HTTP transport over the prediction service.
//!
//! One operation matters: `POST /predict`. The router owns no logic beyond
//! mapping error kinds to status codes; everything else lives in the
//! application layer.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, warn};

use crate::application::service::PredictionService;
use crate::domain::errors::PredictError;

pub fn router(service: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .with_state(service)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn predict(
    State(service): State<Arc<PredictionService>>,
    Json(payload): Json<Value>,
) -> Response {
    match service.predict(&payload) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: PredictError) -> Response {
    match err {
        // Client errors carry the descriptive message; the MissingFields body
        // text is part of the wire contract.
        PredictError::MissingFields { ref fields } => {
            warn!("Rejected prediction request, missing fields: {:?}", fields);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Missing required fields"})),
            )
                .into_response()
        }
        PredictError::Malformed { .. } | PredictError::Encoding(_) => {
            warn!("Rejected prediction request: {}", err);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": err.to_string()})),
            )
                .into_response()
        }
        // Artifact/environment fault: log the detail, return a generic body.
        PredictError::Inference { .. } => {
            error!("Model scoring failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Prediction failed"})),
            )
                .into_response()
        }
    }
}
