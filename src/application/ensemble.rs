//! The three-model ensemble behind every prediction response.

use crate::application::ml::PricePredictor;
use crate::domain::errors::PredictError;
use crate::domain::feature_registry::EncodedFeatureVector;
use crate::domain::listing::PredictionResult;

/// Three independently trained regressors sharing the frozen feature schema.
///
/// Scoring is all-or-nothing: if any model fails (or emits a non-finite
/// number), the whole call fails and no partial result escapes.
pub struct ModelEnsemble {
    lr: Box<dyn PricePredictor>,
    xgbm: Box<dyn PricePredictor>,
    gbm: Box<dyn PricePredictor>,
}

impl ModelEnsemble {
    pub fn new(
        lr: Box<dyn PricePredictor>,
        xgbm: Box<dyn PricePredictor>,
        gbm: Box<dyn PricePredictor>,
    ) -> Self {
        Self { lr, xgbm, gbm }
    }

    pub fn score(&self, features: &EncodedFeatureVector) -> Result<PredictionResult, PredictError> {
        Ok(PredictionResult {
            predicted_price: self.run(self.lr.as_ref(), features)?,
            predicted_price_xgbm: self.run(self.xgbm.as_ref(), features)?,
            predicted_price_gbm: self.run(self.gbm.as_ref(), features)?,
        })
    }

    fn run(
        &self,
        model: &dyn PricePredictor,
        features: &EncodedFeatureVector,
    ) -> Result<f64, PredictError> {
        let price = model
            .predict(features)
            .map_err(|reason| PredictError::Inference {
                model: model.name().to_string(),
                reason,
            })?;

        if !price.is_finite() {
            return Err(PredictError::Inference {
                model: model.name().to_string(),
                reason: format!("non-finite prediction: {}", price),
            });
        }
        Ok(price)
    }
}
