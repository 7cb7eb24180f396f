//! Request orchestration: validate, encode, score.

use crate::application::encoding::FeatureEncoder;
use crate::application::ensemble::ModelEnsemble;
use crate::domain::errors::PredictError;
use crate::domain::listing::{PredictionResult, REQUIRED_FIELDS, RawListing};
use chrono::{NaiveDateTime, Utc};
use serde_json::Value;

/// The read-only prediction context: one encoder, one ensemble, built once at
/// startup and shared across requests.
pub struct PredictionService {
    encoder: FeatureEncoder,
    ensemble: ModelEnsemble,
}

impl PredictionService {
    pub fn new(encoder: FeatureEncoder, ensemble: ModelEnsemble) -> Self {
        Self { encoder, ensemble }
    }

    /// Full prediction pipeline for one payload. Fails at the first step that
    /// cannot complete; no partial result is ever observable.
    pub fn predict(&self, payload: &Value) -> Result<PredictionResult, PredictError> {
        self.predict_at(payload, Utc::now().naive_utc())
    }

    /// Same pipeline with an injected evaluation time for the temporal
    /// features.
    pub fn predict_at(
        &self,
        payload: &Value,
        now: NaiveDateTime,
    ) -> Result<PredictionResult, PredictError> {
        let missing = missing_fields(payload);
        if !missing.is_empty() {
            return Err(PredictError::MissingFields { fields: missing });
        }

        let listing: RawListing =
            serde_json::from_value(payload.clone()).map_err(|e| PredictError::Malformed {
                reason: e.to_string(),
            })?;

        let features = self.encoder.encode_at(&listing, now)?;
        self.ensemble.score(&features)
    }
}

/// Required keys absent from the payload, in declaration order.
fn missing_fields(payload: &Value) -> Vec<String> {
    let Some(map) = payload.as_object() else {
        return REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect();
    };
    REQUIRED_FIELDS
        .iter()
        .filter(|field| !map.contains_key(**field))
        .map(|field| field.to_string())
        .collect()
}
