use super::predictor::PricePredictor;
use crate::domain::feature_registry::{self, EncodedFeatureVector};
use anyhow::{Context, Result};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// The linear regression model behind `predicted_price`, deserialized from the
/// serde_json artifact the training pipeline exports.
pub struct SmartCorePredictor {
    model: LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl SmartCorePredictor {
    /// Loads the artifact, failing fast: the service must not start without a
    /// scorable model.
    pub fn load(model_path: &Path) -> Result<Self> {
        let file = File::open(model_path)
            .with_context(|| format!("Failed to open model file at {:?}", model_path))?;
        let model = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to deserialize model at {:?}", model_path))?;
        info!("Loaded linear regression model from {:?}", model_path);
        Ok(Self { model })
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, features: &EncodedFeatureVector) -> Result<f64, String> {
        let input_vec = feature_registry::features_to_f64_vector(features);
        let input_matrix = match DenseMatrix::from_2d_vec(&vec![input_vec]) {
            Ok(m) => m,
            Err(e) => return Err(format!("Matrix creation failed: {}", e)),
        };

        match self.model.predict(&input_matrix) {
            Ok(predictions) => {
                if let Some(pred) = predictions.first() {
                    Ok(*pred)
                } else {
                    Err("No prediction returned".to_string())
                }
            }
            Err(e) => Err(format!("Prediction failed: {}", e)),
        }
    }

    fn name(&self) -> &str {
        "SmartCore Linear Regression"
    }
}
