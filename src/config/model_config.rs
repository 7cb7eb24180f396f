//! Model artifact configuration parsing from environment variables.
//!
//! Paths to the three serialized regressors and the optional subtype-table
//! override. The artifacts themselves are produced by the training pipeline;
//! this process only loads them.

use std::env;
use std::path::PathBuf;

/// Model artifact environment configuration
#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub lr_model_path: PathBuf,
    pub xgbm_model_path: PathBuf,
    pub gbm_model_path: PathBuf,
    pub subtype_table_path: Option<PathBuf>,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            lr_model_path: PathBuf::from("models/lr_model.json"),
            xgbm_model_path: PathBuf::from("models/xgbm_model.onnx"),
            gbm_model_path: PathBuf::from("models/gbm_model.onnx"),
            subtype_table_path: None,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            lr_model_path: env::var("LR_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.lr_model_path),
            xgbm_model_path: env::var("XGBM_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.xgbm_model_path),
            gbm_model_path: env::var("GBM_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.gbm_model_path),
            subtype_table_path: env::var("SUBTYPE_TABLE_PATH").ok().map(PathBuf::from),
        }
    }
}
