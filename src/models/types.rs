//! Type definitions for model artifacts and predictions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary class label returned by a classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    pub fn as_u8(&self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Estimator family stored in an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    LogisticRegression,
    LinearSvc,
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorKind::LogisticRegression => write!(f, "logistic regression"),
            EstimatorKind::LinearSvc => write!(f, "linear SVC"),
        }
    }
}

/// Format bytes into human-readable size
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base: f64 = 1024.0;
    let exponent = ((bytes as f64).log(base).floor() as usize).min(UNITS.len() - 1);
    let size = bytes as f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Negative.to_string(), "0");
        assert_eq!(Label::Positive.to_string(), "1");
    }

    #[test]
    fn test_estimator_serde_names() {
        let kind: EstimatorKind = serde_json::from_str("\"linear_svc\"").unwrap();
        assert_eq!(kind, EstimatorKind::LinearSvc);
        let kind: EstimatorKind = serde_json::from_str("\"logistic_regression\"").unwrap();
        assert_eq!(kind, EstimatorKind::LogisticRegression);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512.00 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1048576), "1.00 MB");
    }
}
