//! Disease schemas
//!
//! Each disease fixes the ordered field list its model was trained on,
//! the artifact file it is loaded from, and the two diagnosis strings.

use crate::errors::DiagnosisError;
use crate::schema::fields::{FieldSpec, DIABETES_FIELDS, HEART_DISEASE_FIELDS, PARKINSONS_FIELDS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported disease schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Diabetes,
    #[value(alias = "heart", alias = "heart_disease")]
    HeartDisease,
    #[value(alias = "parkinson")]
    Parkinsons,
}

/// Home page blurb for a disease
#[derive(Debug, Clone, Copy)]
pub struct DiseaseAbout {
    pub summary: &'static str,
    pub symptoms: &'static str,
    pub link: &'static str,
}

impl Disease {
    /// All schemas in menu order
    pub const ALL: [Disease; 3] = [Disease::Diabetes, Disease::HeartDisease, Disease::Parkinsons];

    /// Stable identifier used in config and artifact files
    pub fn id(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::HeartDisease => "heart_disease",
            Disease::Parkinsons => "parkinsons",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes",
            Disease::HeartDisease => "Heart Disease",
            Disease::Parkinsons => "Parkinson's Disease",
        }
    }

    /// Ordered input fields, in model order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Disease::Diabetes => &DIABETES_FIELDS,
            Disease::HeartDisease => &HEART_DISEASE_FIELDS,
            Disease::Parkinsons => &PARKINSONS_FIELDS,
        }
    }

    /// Number of features the model expects
    pub fn arity(&self) -> usize {
        self.fields().len()
    }

    /// Default artifact file name inside the models directory
    pub fn artifact_file_name(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes_model.json",
            Disease::HeartDisease => "heart_disease_model.json",
            Disease::Parkinsons => "parkinsons_model.json",
        }
    }

    /// Diagnosis text for class label 1
    pub fn positive_label(&self) -> &'static str {
        match self {
            Disease::Diabetes => "The person is diabetic",
            Disease::HeartDisease => "The person is having heart disease",
            Disease::Parkinsons => "The person has Parkinson's disease",
        }
    }

    /// Diagnosis text for class label 0
    pub fn negative_label(&self) -> &'static str {
        match self {
            Disease::Diabetes => "The person is not diabetic",
            Disease::HeartDisease => "The person does not have any heart disease",
            Disease::Parkinsons => "The person does not have Parkinson's disease",
        }
    }

    pub fn about(&self) -> DiseaseAbout {
        match self {
            Disease::Diabetes => DiseaseAbout {
                summary: "Diabetes is a chronic disease that occurs either when the pancreas does not \
                          produce enough insulin or when the body cannot effectively use the insulin it produces.",
                symptoms: "Increased thirst, frequent urination, unexplained weight loss, etc.",
                link: "https://www.diabetes.org/",
            },
            Disease::HeartDisease => DiseaseAbout {
                summary: "Heart disease refers to several types of heart conditions, including coronary \
                          artery disease, heart rhythm problems, and heart defects present at birth.",
                symptoms: "Chest pain or discomfort, shortness of breath, fatigue, etc.",
                link: "https://www.heart.org/en/health-topics/heart-attack/about-heart-attacks",
            },
            Disease::Parkinsons => DiseaseAbout {
                summary: "Parkinson's disease is a progressive nervous system disorder that affects \
                          movement. Symptoms start gradually, sometimes starting with a barely noticeable \
                          tremor in just one hand.",
                symptoms: "Tremors, bradykinesia, muscle rigidity, etc.",
                link: "https://www.parkinson.org/",
            },
        }
    }

    /// Find a field position by name (case-insensitive)
    pub fn field_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.fields()
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for Disease {
    type Err = DiagnosisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "diabetes" => Ok(Disease::Diabetes),
            "heart" | "heart_disease" => Ok(Disease::HeartDisease),
            "parkinsons" | "parkinson" | "parkinson's" => Ok(Disease::Parkinsons),
            _ => Err(DiagnosisError::UnknownSchema(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_per_schema() {
        assert_eq!(Disease::Diabetes.arity(), 8);
        assert_eq!(Disease::HeartDisease.arity(), 13);
        assert_eq!(Disease::Parkinsons.arity(), 22);
    }

    #[test]
    fn test_labels_are_distinct() {
        for disease in Disease::ALL {
            assert_ne!(disease.positive_label(), disease.negative_label());
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("diabetes".parse::<Disease>().unwrap(), Disease::Diabetes);
        assert_eq!("Heart".parse::<Disease>().unwrap(), Disease::HeartDisease);
        assert_eq!("heart-disease".parse::<Disease>().unwrap(), Disease::HeartDisease);
        assert_eq!("parkinson's".parse::<Disease>().unwrap(), Disease::Parkinsons);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "cancer".parse::<Disease>().unwrap_err();
        assert!(matches!(err, DiagnosisError::UnknownSchema(ref s) if s == "cancer"));
    }

    #[test]
    fn test_field_index_case_insensitive() {
        assert_eq!(Disease::Diabetes.field_index("glucose"), Some(1));
        assert_eq!(Disease::HeartDisease.field_index("THAL"), Some(12));
        assert_eq!(Disease::Parkinsons.field_index("PPE"), Some(21));
        assert_eq!(Disease::Diabetes.field_index("chol"), None);
    }

    #[test]
    fn test_serde_id_matches() {
        for disease in Disease::ALL {
            let json = serde_json::to_string(&disease).unwrap();
            assert_eq!(json, format!("\"{}\"", disease.id()));
        }
    }
}
