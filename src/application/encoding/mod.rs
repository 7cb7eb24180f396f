//! Feature encoding pipeline.
//!
//! Turns a [`RawListing`] into the exact numeric vector the models were
//! trained on: an ordered sequence of small pure mapping stages (see
//! [`tables`]) plus numeric coercion and the derived temporal features.
//! Everything here is deterministic given the subtype table and the
//! evaluation time, so encoding the same listing twice yields an identical
//! vector.

pub mod coerce;
pub mod tables;

pub use tables::SubtypeTable;

use crate::domain::errors::EncodeError;
use crate::domain::feature_registry::EncodedFeatureVector;
use crate::domain::listing::RawListing;
use chrono::{NaiveDate, NaiveDateTime, Utc};

/// Anchor date the training notebooks normalized `created_at` against.
/// Changing it desynchronizes serving from every shipped model.
fn temporal_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 2, 9).expect("anchor date is valid")
}

/// Timestamp layouts accepted for `created_at`, tried in order.
const CREATED_AT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
];

fn parse_created_at(raw: Option<&str>) -> Result<NaiveDateTime, EncodeError> {
    let bad = |value: &str| EncodeError::BadTimestamp {
        field: "created_at",
        value: value.to_string(),
    };

    let text = raw.ok_or_else(|| bad(""))?.trim();
    for format in CREATED_AT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date.and_hms_opt(0, 0, 0).expect("midnight is valid"));
        }
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_utc());
    }
    Err(bad(text))
}

/// Pure transformation from raw listings to encoded feature vectors.
///
/// Holds the read-only subtype table; everything else it needs is either in
/// the listing or passed in as the evaluation time.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    subtypes: SubtypeTable,
}

impl FeatureEncoder {
    pub fn new(subtypes: SubtypeTable) -> Self {
        Self { subtypes }
    }

    /// Encodes against the current wall clock. Production entry point.
    pub fn encode(&self, listing: &RawListing) -> Result<EncodedFeatureVector, EncodeError> {
        self.encode_at(listing, Utc::now().naive_utc())
    }

    /// Encodes against an explicit evaluation time, so the derived
    /// `active_days`/`view_velocity` features are reproducible under test.
    pub fn encode_at(
        &self,
        listing: &RawListing,
        now: NaiveDateTime,
    ) -> Result<EncodedFeatureVector, EncodeError> {
        let created = parse_created_at(listing.created_at.as_deref())?;

        // Listings created today (or carrying a future timestamp) count as one
        // active day, so the velocity division is always defined.
        let active_days = (now - created).num_days().max(1);
        let ad_views = coerce::lenient_i64(&listing.ad_view_cnt);

        let subtype = listing.property_subtype.as_deref().unwrap_or("");
        let subtype_code = self.subtypes.code(subtype.trim()).ok_or_else(|| {
            EncodeError::UnknownCategory {
                field: "property_subtype",
                value: subtype.to_string(),
            }
        })?;

        Ok(EncodedFeatureVector {
            postcode: coerce::required_f64("postcode", &listing.postcode)?,
            property_subtype_code: subtype_code as f64,
            condition_code: tables::condition_code(listing.property_condition_type.as_deref()),
            floor_code: tables::floor_code(listing.property_floor.as_deref())?,
            floor_count_code: tables::floor_count_code(listing.building_floor_count.as_deref()),
            view_code: tables::view_code(listing.view_type.as_deref()),
            orientation_code: tables::orientation_code(listing.orientation.as_deref()),
            garden_access_flag: tables::bool_flag(
                "garden_access",
                listing.garden_access.as_deref(),
            )?,
            heating_code: tables::heating_code(listing.heating_type.as_deref()),
            elevator_flag: tables::bool_flag("elevator_type", listing.elevator_type.as_deref())?,
            room_cnt: coerce::required_f64("room_cnt", &listing.room_cnt)?,
            small_room_cnt: coerce::required_f64("small_room_cnt", &listing.small_room_cnt)?,
            created_at_days: (created.date() - temporal_anchor()).num_days() as f64,
            property_area: coerce::required_f64("property_area", &listing.property_area)?,
            balcony_area: coerce::required_f64("balcony_area", &listing.balcony_area)?,
            view_velocity: (ad_views as f64 / active_days as f64) * 100.0,
        })
    }
}
