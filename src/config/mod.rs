//! Configuration module for Homeval.
//!
//! This module provides structured configuration loading from environment
//! variables, organized by domain: Server and Models.

mod model_config;
mod server_config;

pub use model_config::ModelEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::Result;
use std::path::PathBuf;

/// Main application configuration.
///
/// Aggregates all configuration from sub-modules into one flat struct for the
/// rest of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub port: u16,

    // Models
    pub lr_model_path: PathBuf,
    pub xgbm_model_path: PathBuf,
    pub gbm_model_path: PathBuf,
    pub subtype_table_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let server = ServerEnvConfig::from_env();
        let models = ModelEnvConfig::from_env();

        Ok(Self {
            bind_address: server.bind_address,
            port: server.port,
            lr_model_path: models.lr_model_path,
            xgbm_model_path: models.xgbm_model_path,
            gbm_model_path: models.gbm_model_path,
            subtype_table_path: models.subtype_table_path,
        })
    }
}
