use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload keys that must be present for a prediction request.
///
/// Presence is all that is checked at validation time: optional fields may
/// carry `null`, and `city` is accepted but never used by the models.
pub const REQUIRED_FIELDS: &[&str] = &[
    "city",
    "postcode",
    "property_subtype",
    "property_condition_type",
    "property_floor",
    "building_floor_count",
    "view_type",
    "orientation",
    "garden_access",
    "heating_type",
    "elevator_type",
    "room_cnt",
    "small_room_cnt",
    "created_at",
    "property_area",
    "balcony_area",
    "ad_view_cnt",
];

/// A listing exactly as the transport hands it over: loosely typed, one per
/// request. Numeric fields stay as raw JSON values because clients send them
/// interchangeably as numbers or numeric strings; coercion happens in the
/// encoder where a failure can name the field.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub postcode: Value,
    pub property_subtype: Option<String>,
    pub property_condition_type: Option<String>,
    pub property_floor: Option<String>,
    pub building_floor_count: Option<String>,
    pub view_type: Option<String>,
    pub orientation: Option<String>,
    pub garden_access: Option<String>,
    pub heating_type: Option<String>,
    pub elevator_type: Option<String>,
    #[serde(default)]
    pub room_cnt: Value,
    #[serde(default)]
    pub small_room_cnt: Value,
    pub created_at: Option<String>,
    #[serde(default)]
    pub property_area: Value,
    #[serde(default)]
    pub balcony_area: Value,
    #[serde(default)]
    pub ad_view_cnt: Value,
}

/// One price estimate per model. All three are produced or the request fails;
/// the field names are the wire contract of the `/predict` response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub predicted_price: f64,
    pub predicted_price_xgbm: f64,
    pub predicted_price_gbm: f64,
}
