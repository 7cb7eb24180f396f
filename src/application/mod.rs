// Feature encoding pipeline
pub mod encoding;

// Model loading and scoring
pub mod ml;

// Three-model scoring
pub mod ensemble;

// Request orchestration
pub mod service;
