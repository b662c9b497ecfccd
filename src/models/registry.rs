//! Model registry
//!
//! Owns one classifier per disease for the lifetime of the process. Built
//! once during startup and then only read, so it can be shared by
//! reference (or behind an `Arc`) without locking.

use crate::errors::{DiagnosisError, Result};
use crate::models::artifact::ModelArtifact;
use crate::models::classifier::Classifier;
use crate::models::types::Label;
use crate::schema::{Disease, FeatureVector};
use std::path::{Path, PathBuf};

/// Artifact locations for the three schemas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub diabetes: PathBuf,
    pub heart_disease: PathBuf,
    pub parkinsons: PathBuf,
}

impl ModelPaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            diabetes: dir.join(Disease::Diabetes.artifact_file_name()),
            heart_disease: dir.join(Disease::HeartDisease.artifact_file_name()),
            parkinsons: dir.join(Disease::Parkinsons.artifact_file_name()),
        }
    }

    pub fn get(&self, disease: Disease) -> &Path {
        match disease {
            Disease::Diabetes => &self.diabetes,
            Disease::HeartDisease => &self.heart_disease,
            Disease::Parkinsons => &self.parkinsons,
        }
    }
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self::in_dir("saved_models")
    }
}

/// Read-only set of loaded classifiers
pub struct ModelRegistry {
    diabetes: Box<dyn Classifier>,
    heart_disease: Box<dyn Classifier>,
    parkinsons: Box<dyn Classifier>,
}

impl ModelRegistry {
    /// Load all three artifacts
    ///
    /// Fails on the first artifact that is missing, corrupt, or does not
    /// fit its schema.
    pub fn load(paths: &ModelPaths) -> Result<Self> {
        let registry = Self {
            diabetes: Box::new(load_for_schema(Disease::Diabetes, &paths.diabetes)?),
            heart_disease: Box::new(load_for_schema(Disease::HeartDisease, &paths.heart_disease)?),
            parkinsons: Box::new(load_for_schema(Disease::Parkinsons, &paths.parkinsons)?),
        };
        tracing::info!("model registry loaded (3 artifacts)");
        Ok(registry)
    }

    /// Build a registry from arbitrary classifiers
    pub fn from_classifiers(
        diabetes: Box<dyn Classifier>,
        heart_disease: Box<dyn Classifier>,
        parkinsons: Box<dyn Classifier>,
    ) -> Result<Self> {
        for (disease, classifier) in [
            (Disease::Diabetes, &diabetes),
            (Disease::HeartDisease, &heart_disease),
            (Disease::Parkinsons, &parkinsons),
        ] {
            if classifier.arity() != disease.arity() {
                return Err(DiagnosisError::load(
                    disease.id(),
                    format!(
                        "classifier expects {} features, {} schema has {}",
                        classifier.arity(),
                        disease.title(),
                        disease.arity()
                    ),
                ));
            }
        }

        Ok(Self {
            diabetes,
            heart_disease,
            parkinsons,
        })
    }

    pub fn classifier(&self, disease: Disease) -> &dyn Classifier {
        match disease {
            Disease::Diabetes => self.diabetes.as_ref(),
            Disease::HeartDisease => self.heart_disease.as_ref(),
            Disease::Parkinsons => self.parkinsons.as_ref(),
        }
    }

    /// Score a vector with the model for `disease`
    pub fn predict(&self, disease: Disease, features: &FeatureVector) -> Result<Label> {
        let label = self.classifier(disease).predict(features)?;
        tracing::debug!(disease = disease.id(), label = label.as_u8(), "prediction");
        Ok(label)
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("diabetes", &self.diabetes.describe())
            .field("heart_disease", &self.heart_disease.describe())
            .field("parkinsons", &self.parkinsons.describe())
            .finish()
    }
}

/// Load one artifact and check it against its schema
pub fn load_for_schema(disease: Disease, path: &Path) -> Result<ModelArtifact> {
    let artifact = ModelArtifact::load(path)?;

    if artifact.arity() != disease.arity() {
        return Err(DiagnosisError::load(
            path,
            format!(
                "artifact expects {} features, {} schema has {}",
                artifact.arity(),
                disease.title(),
                disease.arity()
            ),
        ));
    }

    if let Some(declared) = artifact.disease() {
        if declared != disease {
            return Err(DiagnosisError::load(
                path,
                format!("artifact was trained for {}, not {}", declared.title(), disease.title()),
            ));
        }
    }

    if let Some(names) = artifact.feature_names() {
        for (i, (name, field)) in names.iter().zip(disease.fields()).enumerate() {
            if !name.eq_ignore_ascii_case(field.name) {
                return Err(DiagnosisError::load(
                    path,
                    format!("feature #{} is '{}' but the form sends '{}'", i, name, field.name),
                ));
            }
        }
    }

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::EstimatorKind;
    use tempfile::TempDir;

    fn zero_model(n: usize) -> ModelArtifact {
        ModelArtifact::linear(EstimatorKind::LinearSvc, vec![0.0; n], -1.0)
    }

    fn write_all(dir: &Path) -> ModelPaths {
        let paths = ModelPaths::in_dir(dir);
        for disease in Disease::ALL {
            zero_model(disease.arity()).save(paths.get(disease)).unwrap();
        }
        paths
    }

    #[test]
    fn test_paths_in_dir() {
        let paths = ModelPaths::in_dir("models");
        assert_eq!(paths.diabetes, PathBuf::from("models/diabetes_model.json"));
        assert_eq!(paths.get(Disease::Parkinsons), Path::new("models/parkinsons_model.json"));
    }

    #[test]
    fn test_load_all() {
        let dir = TempDir::new().unwrap();
        let paths = write_all(dir.path());
        let registry = ModelRegistry::load(&paths).unwrap();
        for disease in Disease::ALL {
            assert_eq!(registry.classifier(disease).arity(), disease.arity());
        }
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        let dir = TempDir::new().unwrap();
        let paths = write_all(dir.path());
        std::fs::remove_file(&paths.heart_disease).unwrap();
        let err = ModelRegistry::load(&paths).unwrap_err();
        assert!(matches!(err, DiagnosisError::Load { ref path, .. } if path == &paths.heart_disease));
    }

    #[test]
    fn test_load_wrong_arity_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("d.json");
        zero_model(9).save(&path).unwrap();
        assert!(load_for_schema(Disease::Diabetes, &path).is_err());
    }

    #[test]
    fn test_load_wrong_disease_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("d.json");
        zero_model(8).with_disease(Disease::HeartDisease).save(&path).unwrap();
        assert!(load_for_schema(Disease::Diabetes, &path).is_err());
    }

    #[test]
    fn test_feature_name_drift_detected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("d.json");
        let mut names: Vec<String> = Disease::Diabetes.fields().iter().map(|f| f.name.to_string()).collect();
        names.swap(1, 2);
        zero_model(8).with_feature_names(names).save(&path).unwrap();
        let err = load_for_schema(Disease::Diabetes, &path).unwrap_err();
        assert!(err.to_string().contains("feature #1"));
    }

    #[test]
    fn test_feature_names_matching() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("d.json");
        let names = Disease::Diabetes.fields().iter().map(|f| f.name.to_lowercase()).collect();
        zero_model(8).with_feature_names(names).save(&path).unwrap();
        assert!(load_for_schema(Disease::Diabetes, &path).is_ok());
    }

    #[test]
    fn test_from_classifiers_checks_arity() {
        let result = ModelRegistry::from_classifiers(
            Box::new(zero_model(8)),
            Box::new(zero_model(8)),
            Box::new(zero_model(22)),
        );
        assert!(result.is_err());
    }
}
