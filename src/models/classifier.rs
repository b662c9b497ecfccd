//! Classifier abstraction the registry stores
//!
//! Loaded artifacts implement it; tests and alternative model formats can
//! plug in their own implementations.

use crate::errors::Result;
use crate::models::types::Label;
use crate::schema::FeatureVector;

/// A deterministic, stateless binary classifier
pub trait Classifier: Send + Sync {
    /// Number of features accepted by `predict`
    fn arity(&self) -> usize;

    /// Score one feature vector
    ///
    /// Implementations must fail with `DiagnosisError::Inference` when the
    /// vector length differs from `arity()`.
    fn predict(&self, features: &FeatureVector) -> Result<Label>;

    /// Short description for diagnostics
    fn describe(&self) -> String {
        format!("classifier ({} features)", self.arity())
    }
}
