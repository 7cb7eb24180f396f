/// Ordered list of feature names.
/// This order MUST match exactly with the column order used by the training
/// notebooks. Any change here is a breaking change for all three models.
pub const FEATURE_NAMES: &[&str] = &[
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
    "view_velocity",
];

/// A fully encoded listing, field-for-field in the order of [`FEATURE_NAMES`].
///
/// Models never see this struct; they see the flattened vectors below. The
/// struct exists so each feature keeps a name between the encoder and the
/// flattening step instead of living as an anonymous index.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EncodedFeatureVector {
    pub postcode: f64,
    pub property_subtype_code: f64,
    pub condition_code: f64,
    pub floor_code: f64,
    pub floor_count_code: f64,
    pub view_code: f64,
    pub orientation_code: f64,
    pub garden_access_flag: f64,
    pub heating_code: f64,
    pub elevator_flag: f64,
    pub room_cnt: f64,
    pub small_room_cnt: f64,
    pub created_at_days: f64,
    pub property_area: f64,
    pub balcony_area: f64,
    pub view_velocity: f64,
}

/// Flattens an encoded listing for the smartcore regressor (f64 precision).
pub fn features_to_f64_vector(v: &EncodedFeatureVector) -> Vec<f64> {
    vec![
        v.postcode,
        v.property_subtype_code,
        v.condition_code,
        v.floor_code,
        v.floor_count_code,
        v.view_code,
        v.orientation_code,
        v.garden_access_flag,
        v.heating_code,
        v.elevator_flag,
        v.room_cnt,
        v.small_room_cnt,
        v.created_at_days,
        v.property_area,
        v.balcony_area,
        v.view_velocity,
    ]
}

/// Flattens an encoded listing for ONNX inference (f32 input tensors).
pub fn features_to_f32_vector(v: &EncodedFeatureVector) -> Vec<f32> {
    features_to_f64_vector(v).into_iter().map(|f| f as f32).collect()
}
