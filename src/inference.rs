//! Inference adapter
//!
//! Turns ordered user-entered fields into the numeric vector a model
//! expects, scores it through the registry, and maps the class label to
//! the fixed diagnosis text of the disease.

use crate::errors::{DiagnosisError, Result};
use crate::models::{Label, ModelRegistry};
use crate::schema::{ClinicalRecord, Disease, FeatureVector, FieldValue};
use serde::Serialize;
use std::fmt;

/// Outcome of one classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagnosisResult {
    pub disease: Disease,
    pub label: Label,
}

impl DiagnosisResult {
    pub fn new(disease: Disease, label: Label) -> Self {
        Self { disease, label }
    }

    pub fn is_positive(&self) -> bool {
        self.label == Label::Positive
    }

    /// The diagnosis text shown to the user
    pub fn message(&self) -> &'static str {
        match self.label {
            Label::Positive => self.disease.positive_label(),
            Label::Negative => self.disease.negative_label(),
        }
    }
}

impl fmt::Display for DiagnosisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Coerce raw fields into a feature vector for `disease`
///
/// The count must equal the schema arity exactly; values keep their order.
/// Ranges are not checked here.
pub fn coerce_fields(disease: Disease, raw_fields: &[FieldValue]) -> Result<FeatureVector> {
    let fields = disease.fields();
    if raw_fields.len() != fields.len() {
        let index = raw_fields.len().min(fields.len());
        let field = fields.get(index).map(|f| f.name).unwrap_or("<extra>");
        return Err(DiagnosisError::invalid_input(
            index,
            field,
            format!(
                "{} expects {} fields, got {}",
                disease.title(),
                fields.len(),
                raw_fields.len()
            ),
        ));
    }

    let values = raw_fields
        .iter()
        .zip(fields)
        .enumerate()
        .map(|(index, (raw, spec))| {
            raw.coerce()
                .map_err(|reason| DiagnosisError::invalid_input(index, spec.name, reason))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(FeatureVector::new(values))
}

/// Classifies user input against the models in a registry
#[derive(Debug, Clone, Copy)]
pub struct InferenceAdapter<'a> {
    registry: &'a ModelRegistry,
}

impl<'a> InferenceAdapter<'a> {
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self { registry }
    }

    /// Classify ordered raw fields for a disease
    pub fn classify(&self, disease: Disease, raw_fields: &[FieldValue]) -> Result<DiagnosisResult> {
        let features = coerce_fields(disease, raw_fields)?;
        self.classify_vector(disease, &features)
    }

    /// Classify using a textual schema id such as `"heart"`
    pub fn classify_by_id(&self, schema_id: &str, raw_fields: &[FieldValue]) -> Result<DiagnosisResult> {
        let disease: Disease = schema_id.parse()?;
        self.classify(disease, raw_fields)
    }

    /// Classify a typed record
    pub fn classify_record<R: ClinicalRecord>(&self, record: &R) -> Result<DiagnosisResult> {
        self.classify_vector(R::DISEASE, &record.to_features())
    }

    /// Classify an already-built vector
    pub fn classify_vector(&self, disease: Disease, features: &FeatureVector) -> Result<DiagnosisResult> {
        let label = self.registry.predict(disease, features)?;
        let result = DiagnosisResult::new(disease, label);
        tracing::info!(disease = disease.id(), label = label.as_u8(), "diagnosis: {}", result);
        Ok(result)
    }
}
