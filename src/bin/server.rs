//! Homeval Server - Headless price prediction service
//!
//! Loads the three trained regressors and the subtype table at startup, then
//! serves `POST /predict` until interrupted.
//!
//! # Usage
//! ```sh
//! PORT=5000 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `BIND_ADDRESS` / `PORT` - Listen address (default: 0.0.0.0:5000)
//! - `LR_MODEL_PATH` - Linear regression artifact (default: models/lr_model.json)
//! - `XGBM_MODEL_PATH` / `GBM_MODEL_PATH` - ONNX artifacts
//! - `SUBTYPE_TABLE_PATH` - Override for the embedded subtype code table

use anyhow::{Context, Result};
use homeval::application::encoding::{FeatureEncoder, SubtypeTable};
use homeval::application::ensemble::ModelEnsemble;
use homeval::application::ml::{OnnxPredictor, SmartCorePredictor};
use homeval::application::service::PredictionService;
use homeval::config::Config;
use homeval::infrastructure::http;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Homeval Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: bind={}:{}, models=[{:?}, {:?}, {:?}]",
        config.bind_address,
        config.port,
        config.lr_model_path,
        config.xgbm_model_path,
        config.gbm_model_path
    );

    let subtypes = match &config.subtype_table_path {
        Some(path) => SubtypeTable::from_file(path)?,
        None => SubtypeTable::builtin()?,
    };
    info!("Subtype table loaded ({} entries)", subtypes.len());

    // All three regressors must load, or the process must not come up.
    let lr = SmartCorePredictor::load(&config.lr_model_path)?;
    let xgbm = OnnxPredictor::load("XGBoost", &config.xgbm_model_path)?;
    let gbm = OnnxPredictor::load("Gradient Boosting", &config.gbm_model_path)?;
    let ensemble = ModelEnsemble::new(Box::new(lr), Box::new(xgbm), Box::new(gbm));

    let service = Arc::new(PredictionService::new(
        FeatureEncoder::new(subtypes),
        ensemble,
    ));
    let app = http::router(service);

    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    info!("Shutdown signal received. Exiting...");

    Ok(())
}
