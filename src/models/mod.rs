//! Model registry and artifacts
//!
//! This module provides:
//! - Loading fitted classifiers from artifact files
//! - A registry holding one classifier per disease
//! - The `Classifier` trait the registry is written against

pub mod artifact;
pub mod classifier;
pub mod registry;
pub mod types;

// Re-export key types for convenience
pub use artifact::ModelArtifact;
pub use classifier::Classifier;
pub use registry::{ModelPaths, ModelRegistry};
pub use types::{EstimatorKind, Label};
