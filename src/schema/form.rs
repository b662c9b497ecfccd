//! Form collector for one disease page
//!
//! Holds the current value of every widget, starting at the widget
//! defaults. Values outside a widget's bounds are rejected here, the way a
//! slider would refuse them; the inference adapter does not re-check ranges.

use crate::errors::{DiagnosisError, Result};
use crate::schema::disease::Disease;
use crate::schema::fields::FieldSpec;
use crate::schema::values::FieldValue;

/// Bounded field values for a single schema
#[derive(Debug, Clone, PartialEq)]
pub struct FormCollector {
    disease: Disease,
    values: Vec<f64>,
}

impl FormCollector {
    /// Create a form with every field at its default
    pub fn new(disease: Disease) -> Self {
        Self {
            disease,
            values: disease.fields().iter().map(|f| f.default).collect(),
        }
    }

    pub fn disease(&self) -> Disease {
        self.disease
    }

    /// Set a field by position
    pub fn set_index(&mut self, index: usize, value: f64) -> Result<()> {
        let spec = self.spec(index)?;
        if !spec.accepts(value) {
            let reason = if spec.integer && value.fract() != 0.0 {
                format!("{} requires a whole number", spec.label)
            } else {
                format!("{} is outside {}", value, spec.bounds())
            };
            return Err(DiagnosisError::invalid_input(index, spec.name, reason));
        }
        self.values[index] = value;
        Ok(())
    }

    /// Set a field by name (case-insensitive)
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        let index = self.index_of(name)?;
        self.set_index(index, value)
    }

    /// Apply a `NAME=VALUE` assignment
    pub fn apply(&mut self, assignment: &str) -> Result<()> {
        let (name, raw) = assignment.split_once('=').ok_or_else(|| {
            let index = self.disease.field_index(assignment).unwrap_or(self.disease.arity());
            DiagnosisError::invalid_input(index, assignment.trim(), "expected NAME=VALUE")
        })?;
        let index = self.index_of(name)?;
        let value = FieldValue::from(raw)
            .coerce()
            .map_err(|reason| DiagnosisError::invalid_input(index, self.disease.fields()[index].name, reason))?;
        self.set_index(index, value)
    }

    /// Current value of a field by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.disease.field_index(name).map(|i| self.values[i])
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::new(self.disease);
    }

    /// Ordered raw fields ready for the inference adapter
    pub fn values(&self) -> Vec<FieldValue> {
        self.values.iter().copied().map(FieldValue::Float).collect()
    }

    /// Field specs paired with current values
    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldSpec, f64)> + '_ {
        self.disease.fields().iter().zip(self.values.iter().copied())
    }

    fn spec(&self, index: usize) -> Result<&'static FieldSpec> {
        self.disease.fields().get(index).ok_or_else(|| {
            DiagnosisError::invalid_input(
                index,
                format!("#{}", index),
                format!("{} has only {} fields", self.disease.title(), self.disease.arity()),
            )
        })
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.disease.field_index(name).ok_or_else(|| {
            DiagnosisError::invalid_input(
                self.disease.arity(),
                name.trim(),
                format!("no such field for {}", self.disease.title()),
            )
        })
    }
}
