//! Disease schemas, typed clinical records and form collection
//!
//! - `disease`: schema identity, arity, labels
//! - `fields`: ordered widget tables per disease
//! - `records`: strongly typed fixed-size inputs
//! - `form`: bounded value collection from user input

pub mod disease;
pub mod fields;
pub mod form;
pub mod records;
pub mod values;

pub use disease::{Disease, DiseaseAbout};
pub use fields::FieldSpec;
pub use form::FormCollector;
pub use records::{ClinicalRecord, DiabetesInput, HeartDiseaseInput, ParkinsonsInput};
pub use values::{FeatureVector, FieldValue};
