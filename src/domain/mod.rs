// Listing payload and prediction result types
pub mod listing;

// Frozen feature schema shared with the training scripts
pub mod feature_registry;

// Domain-specific error types
pub mod errors;
