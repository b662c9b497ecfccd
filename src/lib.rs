//! healthassist - Multiple Disease Prediction
//!
//! Collects clinical measurements, scores them with pre-trained binary
//! classifiers for diabetes, heart disease and Parkinson's disease, and
//! reports a fixed diagnosis string per disease.
//!
//! # Architecture
//!
//! - **models**: artifact loading and the read-only model registry
//! - **schema**: per-disease fields, typed records, form collection
//! - **inference**: raw fields to feature vector to diagnosis
//! - **cli / repl / doctor**: terminal front end

pub mod errors;
pub mod config;
pub mod schema;
pub mod models;
pub mod inference;

// Re-export commonly used types
pub use errors::{DiagnosisError, Result};
pub use inference::{DiagnosisResult, InferenceAdapter};
pub use models::{ModelArtifact, ModelPaths, ModelRegistry};
pub use schema::{Disease, FieldValue};

// Terminal front end
pub mod cli;
pub mod doctor;
pub mod repl;
