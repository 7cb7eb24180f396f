//! Shared fixtures: a prediction service wired with deterministic stub models
//! instead of real artifacts.

use homeval::application::encoding::{FeatureEncoder, SubtypeTable};
use homeval::application::ensemble::ModelEnsemble;
use homeval::application::ml::PricePredictor;
use homeval::application::service::PredictionService;
use homeval::domain::feature_registry::EncodedFeatureVector;
use serde_json::{Value, json};
use std::sync::Arc;

/// Deterministic stand-in for a trained regressor: price scales with area and
/// floor so different payloads give different, finite estimates.
pub struct StubModel {
    pub name: &'static str,
    pub per_sqm: f64,
}

impl PricePredictor for StubModel {
    fn predict(&self, features: &EncodedFeatureVector) -> Result<f64, String> {
        Ok(features.property_area * self.per_sqm + features.floor_code * 1000.0)
    }

    fn name(&self) -> &str {
        self.name
    }
}

pub fn test_service() -> PredictionService {
    let ensemble = ModelEnsemble::new(
        Box::new(StubModel {
            name: "lr",
            per_sqm: 900_000.0,
        }),
        Box::new(StubModel {
            name: "xgbm",
            per_sqm: 950_000.0,
        }),
        Box::new(StubModel {
            name: "gbm",
            per_sqm: 880_000.0,
        }),
    );
    let encoder = FeatureEncoder::new(SubtypeTable::builtin().expect("builtin table"));
    PredictionService::new(encoder, ensemble)
}

pub fn test_router() -> axum::Router {
    homeval::infrastructure::http::router(Arc::new(test_service()))
}

/// A payload covering every required field with values from the documented
/// closed sets.
pub fn full_payload() -> Value {
    json!({
        "city": "Budapest",
        "postcode": "1065",
        "property_subtype": "brick apartment",
        "property_condition_type": "good",
        "property_floor": "5",
        "building_floor_count": "7",
        "view_type": "garden view",
        "orientation": "south",
        "garden_access": "yes",
        "heating_type": "central heating",
        "elevator_type": "yes",
        "room_cnt": 3,
        "small_room_cnt": 1,
        "created_at": "2024-08-29 12:00:00",
        "property_area": 64.5,
        "balcony_area": 4,
        "ad_view_cnt": 120,
    })
}
