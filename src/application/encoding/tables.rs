//! Category-to-ordinal mapping tables.
//!
//! Each function is one stage of the encoding pipeline: a pure map from a raw
//! category value to its numeric code, with the fallback policy the models
//! were trained against. Functions that have a documented default never fail;
//! functions without a safe default return an [`EncodeError`] naming the field.

use crate::domain::errors::EncodeError;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default subtype table, generated by the training scripts.
const BUILTIN_SUBTYPES: &str = include_str!("../../../data/property_subtypes.json");

/// Fixed property-subtype code table.
///
/// Subtypes are an open set, so the code assignment is a training-time
/// artifact shipped alongside the models and loaded immutably at startup.
/// Deriving codes from the values seen in a request would hand the same
/// subtype different codes across calls, silently corrupting predictions.
#[derive(Debug, Clone)]
pub struct SubtypeTable {
    codes: HashMap<String, i64>,
}

impl SubtypeTable {
    pub fn from_json(raw: &str) -> Result<Self> {
        let codes: HashMap<String, i64> =
            serde_json::from_str(raw).context("Failed to parse subtype table JSON")?;
        Ok(Self { codes })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtype table at {:?}", path))?;
        Self::from_json(&raw)
    }

    /// The table embedded at build time, for deployments that do not override
    /// `SUBTYPE_TABLE_PATH`.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SUBTYPES)
    }

    pub fn code(&self, subtype: &str) -> Option<i64> {
        self.codes.get(subtype).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Condition labels collapse into four ordinal buckets; anything unknown or
/// missing counts as the worst bucket (1), matching the training data.
pub fn condition_code(raw: Option<&str>) -> f64 {
    match raw.map(str::trim) {
        Some("medium" | "under_construction") => 2.0,
        Some("good" | "renewed") => 3.0,
        Some("can_move_in" | "new_construction" | "novel") => 4.0,
        // "to_be_renovated", "missing_info", anything else, or absent
        _ => 1.0,
    }
}

/// Named floor band, the intermediate stage of the two-stage floor mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorBand {
    Basement = 0,
    GroundFloor = 1,
    Mezzanine = 2,
    LowFloor = 3,
    MidFloor = 4,
    HighFloor = 5,
    VeryHighFloor = 6,
}

/// Stage one: raw floor value to named band.
pub fn floor_band(raw: &str) -> Option<FloorBand> {
    match raw {
        "basement" => Some(FloorBand::Basement),
        "ground floor" => Some(FloorBand::GroundFloor),
        "mezzanine floor" => Some(FloorBand::Mezzanine),
        "1" | "2" | "3" => Some(FloorBand::LowFloor),
        "4" | "5" | "6" | "7" => Some(FloorBand::MidFloor),
        "8" | "9" | "10" => Some(FloorBand::HighFloor),
        "10 plus" => Some(FloorBand::VeryHighFloor),
        _ => None,
    }
}

/// Stage two: named band to ordinal 0..=6. A raw value outside stage one has
/// no band and no ordinal, so it is an explicit encoding failure rather than
/// an undefined number flowing into the models.
pub fn floor_code(raw: Option<&str>) -> Result<f64, EncodeError> {
    let value = raw.unwrap_or("");
    let band = floor_band(value.trim()).ok_or_else(|| EncodeError::UnknownCategory {
        field: "property_floor",
        value: value.to_string(),
    })?;
    Ok(band as i64 as f64)
}

/// Building story count bucketed into five tiers, ordinal 0..=4. Anything
/// outside the buckets becomes the -1 "unknown" sentinel, never an error.
pub fn floor_count_code(raw: Option<&str>) -> f64 {
    match raw.map(str::trim) {
        Some("1") => 0.0,
        Some("2" | "3") => 1.0,
        Some("4" | "5" | "6") => 2.0,
        Some("7" | "8" | "9" | "10") => 3.0,
        Some("more than 10") => 4.0,
        _ => -1.0,
    }
}

/// View type ordinal; missing or unrecognized values default to 0.
pub fn view_code(raw: Option<&str>) -> f64 {
    match raw.map(str::trim) {
        Some("street view") => 1.0,
        Some("courtyard view") => 2.0,
        Some("garden view") => 3.0,
        Some("panoramic") => 4.0,
        _ => 0.0,
    }
}

/// Compass orientation bucketed onto a 0..=3 scale; missing maps to 0.
pub fn orientation_code(raw: Option<&str>) -> f64 {
    match raw.map(str::trim) {
        Some("north" | "north-west" | "north-east") => 1.0,
        Some("east" | "west") => 2.0,
        Some("south" | "south-east" | "south-west") => 3.0,
        _ => 0.0,
    }
}

/// Strict yes/no flag. These fields have no safe default: a value other than
/// "yes" or "no" rejects the request.
pub fn bool_flag(field: &'static str, raw: Option<&str>) -> Result<f64, EncodeError> {
    match raw.map(str::trim) {
        Some("no") => Ok(0.0),
        Some("yes") => Ok(1.0),
        other => Err(EncodeError::UnknownCategory {
            field,
            value: other.unwrap_or("").to_string(),
        }),
    }
}

/// Canonical heating class, ordinal-encoded in this fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeatingClass {
    Unknown = 0,
    Gas = 1,
    Central = 2,
    Electric = 3,
    Other = 4,
}

fn heating_class(raw: &str) -> HeatingClass {
    match raw {
        "gas furnace" | "konvection gas burner" | "tile stove (gas)" => HeatingClass::Gas,
        "central heating"
        | "central heating with own meter"
        | "district heating"
        | "circulating hot water"
        | "gas furnace, circulating hot water" => HeatingClass::Central,
        "electric" | "fan-coil" => HeatingClass::Electric,
        "other" => HeatingClass::Other,
        _ => HeatingClass::Unknown,
    }
}

/// Free-text heating description normalized to a canonical class, then
/// ordinal-encoded. Text outside the synonym table, or a missing value,
/// resolves to unknown (0).
pub fn heating_code(raw: Option<&str>) -> f64 {
    heating_class(raw.unwrap_or("unknown").trim()) as i64 as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_buckets() {
        assert_eq!(condition_code(Some("to_be_renovated")), 1.0);
        assert_eq!(condition_code(Some("missing_info")), 1.0);
        assert_eq!(condition_code(Some("medium")), 2.0);
        assert_eq!(condition_code(Some("under_construction")), 2.0);
        assert_eq!(condition_code(Some("good")), 3.0);
        assert_eq!(condition_code(Some("renewed")), 3.0);
        assert_eq!(condition_code(Some("can_move_in")), 4.0);
        assert_eq!(condition_code(Some("new_construction")), 4.0);
        assert_eq!(condition_code(Some("novel")), 4.0);
    }

    #[test]
    fn test_condition_unknown_falls_to_worst_bucket() {
        assert_eq!(condition_code(None), 1.0);
        assert_eq!(condition_code(Some("pristine")), 1.0);
    }

    #[test]
    fn test_floor_two_stage_mapping() {
        assert_eq!(floor_code(Some("basement")).unwrap(), 0.0);
        assert_eq!(floor_code(Some("ground floor")).unwrap(), 1.0);
        assert_eq!(floor_code(Some("mezzanine floor")).unwrap(), 2.0);
        assert_eq!(floor_code(Some("2")).unwrap(), 3.0);
        assert_eq!(floor_code(Some("5")).unwrap(), 4.0);
        assert_eq!(floor_code(Some("9")).unwrap(), 5.0);
        assert_eq!(floor_code(Some("10 plus")).unwrap(), 6.0);
    }

    #[test]
    fn test_floor_unknown_is_an_error() {
        let err = floor_code(Some("12")).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::UnknownCategory {
                field: "property_floor",
                ..
            }
        ));
        assert!(floor_code(None).is_err());
    }

    #[test]
    fn test_floor_count_buckets_and_sentinel() {
        assert_eq!(floor_count_code(Some("1")), 0.0);
        assert_eq!(floor_count_code(Some("3")), 1.0);
        assert_eq!(floor_count_code(Some("7")), 3.0);
        assert_eq!(floor_count_code(Some("more than 10")), 4.0);
        // Out-of-range and missing values get the sentinel, not an error.
        assert_eq!(floor_count_code(Some("14")), -1.0);
        assert_eq!(floor_count_code(None), -1.0);
    }

    #[test]
    fn test_view_defaults_to_zero() {
        assert_eq!(view_code(Some("street view")), 1.0);
        assert_eq!(view_code(Some("garden view")), 3.0);
        assert_eq!(view_code(Some("panoramic")), 4.0);
        assert_eq!(view_code(Some("sea view")), 0.0);
        assert_eq!(view_code(None), 0.0);
    }

    #[test]
    fn test_orientation_buckets() {
        assert_eq!(orientation_code(Some("north")), 1.0);
        assert_eq!(orientation_code(Some("north-east")), 1.0);
        assert_eq!(orientation_code(Some("east")), 2.0);
        assert_eq!(orientation_code(Some("west")), 2.0);
        assert_eq!(orientation_code(Some("south")), 3.0);
        assert_eq!(orientation_code(Some("south-west")), 3.0);
        assert_eq!(orientation_code(None), 0.0);
        assert_eq!(orientation_code(Some("up")), 0.0);
    }

    #[test]
    fn test_bool_flag_is_strict() {
        assert_eq!(bool_flag("garden_access", Some("yes")).unwrap(), 1.0);
        assert_eq!(bool_flag("garden_access", Some("no")).unwrap(), 0.0);

        let err = bool_flag("elevator_type", Some("maybe")).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::UnknownCategory {
                field: "elevator_type",
                ..
            }
        ));
        assert!(bool_flag("garden_access", None).is_err());
    }

    #[test]
    fn test_heating_synonyms() {
        assert_eq!(heating_code(Some("gas furnace")), 1.0);
        assert_eq!(heating_code(Some("konvection gas burner")), 1.0);
        assert_eq!(heating_code(Some("tile stove (gas)")), 1.0);
        assert_eq!(heating_code(Some("central heating")), 2.0);
        assert_eq!(heating_code(Some("district heating")), 2.0);
        assert_eq!(heating_code(Some("gas furnace, circulating hot water")), 2.0);
        assert_eq!(heating_code(Some("electric")), 3.0);
        assert_eq!(heating_code(Some("fan-coil")), 3.0);
        assert_eq!(heating_code(Some("other")), 4.0);
    }

    #[test]
    fn test_heating_unknown_defaults_to_zero() {
        assert_eq!(heating_code(Some("unrecognized text")), 0.0);
        assert_eq!(heating_code(None), 0.0);
        assert_eq!(heating_code(Some("unknown")), 0.0);
    }

    #[test]
    fn test_builtin_subtype_table_loads() {
        let table = SubtypeTable::builtin().expect("builtin table should parse");
        assert!(!table.is_empty());
        assert_eq!(table.code("brick apartment"), Some(1));
        assert_eq!(table.code("panel apartment"), Some(2));
        assert_eq!(table.code("houseboat"), None);
    }

    #[test]
    fn test_subtype_table_from_json() {
        let table = SubtypeTable::from_json(r#"{"loft": 3}"#).expect("table should parse");
        assert_eq!(table.len(), 1);
        assert_eq!(table.code("loft"), Some(3));
    }
}
