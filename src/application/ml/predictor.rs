use crate::domain::feature_registry::EncodedFeatureVector;

/// Interface for a loaded price regressor.
///
/// Implementations are immutable after load; `predict` may be called from any
/// number of request tasks concurrently.
pub trait PricePredictor: Send + Sync {
    /// Score one encoded listing, returning a price estimate.
    fn predict(&self, features: &EncodedFeatureVector) -> Result<f64, String>;

    /// Get model name/type
    fn name(&self) -> &str;
}
