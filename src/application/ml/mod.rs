mod onnx_predictor;
mod predictor;
mod smartcore_predictor;

pub use onnx_predictor::OnnxPredictor;
pub use predictor::PricePredictor;
pub use smartcore_predictor::SmartCorePredictor;
