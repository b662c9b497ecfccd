//! Serialized model artifacts
//!
//! An artifact is a JSON document holding the parameters of a fitted
//! linear decision model, optionally preceded by a standard scaler:
//!
//! ```text
//! z = sum_i coef_i * (x_i - mean_i) / scale_i + intercept
//! label = 1 if z > 0 else 0
//! ```
//!
//! This matches `predict` for both logistic regression and a linear SVC.

use crate::errors::{DiagnosisError, Result};
use crate::models::classifier::Classifier;
use crate::models::types::{EstimatorKind, Label};
use crate::schema::{Disease, FeatureVector};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// Artifact layout version this build understands
pub const FORMAT_VERSION: u32 = 1;

/// Per-feature standardization applied before the linear model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// A fitted binary classifier loaded from disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    format_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    disease: Option<Disease>,
    estimator: EstimatorKind,
    n_features: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feature_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scaler: Option<Scaler>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl ModelArtifact {
    /// Build an artifact from fitted linear parameters
    pub fn linear(estimator: EstimatorKind, coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            disease: None,
            estimator,
            n_features: coefficients.len(),
            feature_names: None,
            scaler: None,
            coefficients,
            intercept,
        }
    }

    pub fn with_scaler(mut self, mean: Vec<f64>, scale: Vec<f64>) -> Self {
        self.scaler = Some(Scaler { mean, scale });
        self
    }

    pub fn with_disease(mut self, disease: Disease) -> Self {
        self.disease = Some(disease);
        self
    }

    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = Some(names);
        self
    }

    /// Load and validate an artifact file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            let reason = if e.kind() == ErrorKind::NotFound {
                "file not found".to_string()
            } else {
                format!("unreadable: {}", e)
            };
            DiagnosisError::load(path, reason)
        })?;

        let artifact: ModelArtifact = serde_json::from_slice(&bytes)
            .map_err(|e| DiagnosisError::load(path, format!("not a valid model artifact: {}", e)))?;

        artifact
            .validate()
            .map_err(|reason| DiagnosisError::load(path, reason))?;

        tracing::debug!(
            path = %path.display(),
            estimator = %artifact.estimator,
            n_features = artifact.n_features,
            "loaded model artifact"
        );
        Ok(artifact)
    }

    /// Parse an artifact from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(json)
            .map_err(|e| DiagnosisError::load("<inline>", format!("not a valid model artifact: {}", e)))?;
        artifact
            .validate()
            .map_err(|reason| DiagnosisError::load("<inline>", reason))?;
        Ok(artifact)
    }

    /// Write the artifact as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DiagnosisError::Compute(format!("failed to serialize artifact: {}", e)))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check internal consistency of the parameters
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.format_version != FORMAT_VERSION {
            return Err(format!(
                "unsupported format_version {} (expected {})",
                self.format_version, FORMAT_VERSION
            ));
        }
        if self.n_features == 0 {
            return Err("n_features must be greater than 0".to_string());
        }
        if self.coefficients.len() != self.n_features {
            return Err(format!(
                "{} coefficients for {} features",
                self.coefficients.len(),
                self.n_features
            ));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.n_features {
                return Err(format!("{} feature names for {} features", names.len(), self.n_features));
            }
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("parameters must be finite".to_string());
        }
        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != self.n_features || scaler.scale.len() != self.n_features {
                return Err("scaler length does not match n_features".to_string());
            }
            if scaler.mean.iter().any(|m| !m.is_finite()) {
                return Err("scaler mean must be finite".to_string());
            }
            if scaler.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
                return Err("scaler scale must be finite and non-zero".to_string());
            }
        }
        Ok(())
    }

    pub fn estimator(&self) -> EstimatorKind {
        self.estimator
    }

    pub fn disease(&self) -> Option<Disease> {
        self.disease
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    /// Signed distance from the decision boundary
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64> {
        if features.len() != self.n_features {
            return Err(DiagnosisError::Inference {
                expected: self.n_features,
                actual: features.len(),
            });
        }
        if let Some(i) = features.as_slice().iter().position(|x| !x.is_finite()) {
            return Err(DiagnosisError::Compute(format!(
                "feature #{} is not a finite number",
                i
            )));
        }

        let z = features
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, x)| self.coefficients[i] * self.standardize(i, *x))
            .sum::<f64>()
            + self.intercept;

        if !z.is_finite() {
            return Err(DiagnosisError::Compute("decision value overflowed".to_string()));
        }
        Ok(z)
    }

    /// Positive-class probability, for logistic regression only
    pub fn probability(&self, features: &FeatureVector) -> Result<Option<f64>> {
        match self.estimator {
            EstimatorKind::LogisticRegression => {
                let z = self.decision_function(features)?;
                Ok(Some(1.0 / (1.0 + (-z).exp())))
            }
            EstimatorKind::LinearSvc => Ok(None),
        }
    }

    fn standardize(&self, i: usize, x: f64) -> f64 {
        match &self.scaler {
            Some(scaler) => (x - scaler.mean[i]) / scaler.scale[i],
            None => x,
        }
    }
}

impl Classifier for ModelArtifact {
    fn arity(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &FeatureVector) -> Result<Label> {
        let z = self.decision_function(features)?;
        Ok(if z > 0.0 { Label::Positive } else { Label::Negative })
    }

    fn describe(&self) -> String {
        let scaled = if self.scaler.is_some() { ", standardized" } else { "" };
        format!("{} ({} features{})", self.estimator, self.n_features, scaled)
    }
}
