use thiserror::Error;

/// Per-field failures raised while turning a raw listing into a feature vector.
///
/// Every variant names the offending payload field so the transport can tell
/// the caller exactly what to fix. "Unknown, default applied" cases (view type,
/// heating, condition) never produce an error; only values with no safe
/// default do.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Unmappable value for {field}: {value:?}")]
    UnknownCategory { field: &'static str, value: String },

    #[error("Field {field} is not numeric: {value}")]
    NotNumeric { field: &'static str, value: String },

    #[error("Unparseable timestamp in {field}: {value:?}")]
    BadTimestamp { field: &'static str, value: String },
}

/// Errors surfaced by the prediction pipeline.
#[derive(Debug, Error)]
pub enum PredictError {
    /// One or more required payload keys are absent. No model is invoked.
    #[error("Missing required fields")]
    MissingFields { fields: Vec<String> },

    /// The payload keys are present but the payload cannot be read as a listing
    /// (e.g. a category field carrying a JSON object).
    #[error("Malformed payload: {reason}")]
    Malformed { reason: String },

    #[error(transparent)]
    Encoding(#[from] EncodeError),

    /// A loaded model failed to score a well-formed vector. This is an
    /// artifact/environment fault, not a bad request.
    #[error("Model {model} failed to score: {reason}")]
    Inference { model: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_names_the_field() {
        let err = EncodeError::UnknownCategory {
            field: "property_floor",
            value: "attic".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("property_floor"));
        assert!(msg.contains("attic"));
    }

    #[test]
    fn test_missing_fields_message_matches_api_contract() {
        let err = PredictError::MissingFields {
            fields: vec!["postcode".to_string()],
        };
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn test_encode_error_converts_into_predict_error() {
        let err: PredictError = EncodeError::NotNumeric {
            field: "room_cnt",
            value: "\"three\"".to_string(),
        }
        .into();

        assert!(matches!(err, PredictError::Encoding(_)));
        assert!(err.to_string().contains("room_cnt"));
    }
}
