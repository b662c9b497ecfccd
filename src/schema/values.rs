//! Raw field values and the numeric feature vector built from them

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-entered value before numeric coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Coerce to floating point
    ///
    /// Text is trimmed and parsed; booleans map to 0/1.
    pub fn coerce(&self) -> Result<f64, String> {
        match self {
            FieldValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            FieldValue::Int(i) => Ok(*i as f64),
            FieldValue::Float(x) => Ok(*x),
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err("empty value".to_string());
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| format!("'{}' is not a number", trimmed))
            }
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Ordered numeric model input
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl<const N: usize> From<[f64; N]> for FeatureVector {
    fn from(values: [f64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}
