use super::predictor::PricePredictor;
use crate::domain::feature_registry::{self, EncodedFeatureVector};
use anyhow::{Context, Result};
use ort::session::Session;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// A boosted-tree regressor (XGBoost or sklearn GBM) exported to ONNX.
///
/// The session needs `&mut self` to run, so it sits behind a mutex; scoring a
/// single 16-feature row is cheap enough that contention is not a concern.
pub struct OnnxPredictor {
    session: Mutex<Session>,
    name: String,
}

impl OnnxPredictor {
    /// Loads the artifact, failing fast: the service must not start without a
    /// scorable model.
    pub fn load(name: impl Into<String>, model_path: &Path) -> Result<Self> {
        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(model_path)
            .with_context(|| format!("Failed to load ONNX model at {:?}", model_path))?;
        let name = name.into();
        info!("Loaded ONNX model '{}' from {:?}", name, model_path);
        Ok(Self {
            session: Mutex::new(session),
            name,
        })
    }
}

impl PricePredictor for OnnxPredictor {
    fn predict(&self, features: &EncodedFeatureVector) -> Result<f64, String> {
        let input_vec = feature_registry::features_to_f32_vector(features);

        // One row, [batch, features]
        let shape = vec![1usize, input_vec.len()];
        let input_value = ort::value::Value::from_array((shape.as_slice(), input_vec))
            .map_err(|e| format!("Input value creation failed: {}", e))?;
        let inputs = ort::inputs![input_value];

        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Session lock failed: {}", e))?;

        match session.run(inputs) {
            Ok(outputs) => {
                let output_value = outputs
                    .iter()
                    .next()
                    .map(|(_, v)| v)
                    .ok_or("No output found")?;
                let data = output_value
                    .try_extract_tensor::<f32>()
                    .map_err(|e| e.to_string())?;
                Ok(*data.1.iter().next().ok_or("Empty output")? as f64)
            }
            Err(e) => Err(e.to_string()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fails_for_missing_artifact() {
        let result = OnnxPredictor::load("XGBoost", Path::new("non_existent.onnx"));
        assert!(result.is_err());
    }
}
