//! Strongly typed clinical records
//!
//! One record per disease, converted once into a fixed-size array in the
//! exact order the model was trained on.

use crate::schema::disease::Disease;
use crate::schema::values::FeatureVector;
use serde::{Deserialize, Serialize};

/// A typed input record for one disease schema
pub trait ClinicalRecord {
    /// Schema this record belongs to
    const DISEASE: Disease;

    /// Ordered model input
    fn to_features(&self) -> FeatureVector;
}

/// Pima diabetes measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiabetesInput {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree_function: f64,
    pub age: f64,
}

impl DiabetesInput {
    pub fn to_array(&self) -> [f64; 8] {
        [
            self.pregnancies,
            self.glucose,
            self.blood_pressure,
            self.skin_thickness,
            self.insulin,
            self.bmi,
            self.diabetes_pedigree_function,
            self.age,
        ]
    }

    pub fn from_array(v: [f64; 8]) -> Self {
        Self {
            pregnancies: v[0],
            glucose: v[1],
            blood_pressure: v[2],
            skin_thickness: v[3],
            insulin: v[4],
            bmi: v[5],
            diabetes_pedigree_function: v[6],
            age: v[7],
        }
    }
}

impl Default for DiabetesInput {
    fn default() -> Self {
        Self::from_array([0.0, 100.0, 80.0, 20.0, 100.0, 25.0, 0.5, 30.0])
    }
}

impl ClinicalRecord for DiabetesInput {
    const DISEASE: Disease = Disease::Diabetes;

    fn to_features(&self) -> FeatureVector {
        FeatureVector::from(self.to_array())
    }
}

/// Cleveland heart disease measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartDiseaseInput {
    pub age: f64,
    pub sex: f64,
    /// Chest pain type
    pub cp: f64,
    /// Resting blood pressure
    pub trestbps: f64,
    /// Serum cholesterol in mg/dl
    pub chol: f64,
    /// Fasting blood sugar > 120 mg/dl
    pub fbs: f64,
    pub restecg: f64,
    /// Maximum heart rate achieved
    pub thalach: f64,
    /// Exercise induced angina
    pub exang: f64,
    pub oldpeak: f64,
    pub slope: f64,
    pub ca: f64,
    pub thal: f64,
}

impl HeartDiseaseInput {
    pub fn to_array(&self) -> [f64; 13] {
        [
            self.age,
            self.sex,
            self.cp,
            self.trestbps,
            self.chol,
            self.fbs,
            self.restecg,
            self.thalach,
            self.exang,
            self.oldpeak,
            self.slope,
            self.ca,
            self.thal,
        ]
    }

    pub fn from_array(v: [f64; 13]) -> Self {
        Self {
            age: v[0],
            sex: v[1],
            cp: v[2],
            trestbps: v[3],
            chol: v[4],
            fbs: v[5],
            restecg: v[6],
            thalach: v[7],
            exang: v[8],
            oldpeak: v[9],
            slope: v[10],
            ca: v[11],
            thal: v[12],
        }
    }
}

impl Default for HeartDiseaseInput {
    fn default() -> Self {
        Self::from_array([
            40.0, 1.0, 1.0, 120.0, 200.0, 0.0, 0.0, 150.0, 0.0, 0.0, 1.0, 0.0, 1.0,
        ])
    }
}

impl ClinicalRecord for HeartDiseaseInput {
    const DISEASE: Disease = Disease::HeartDisease;

    fn to_features(&self) -> FeatureVector {
        FeatureVector::from(self.to_array())
    }
}

/// Voice measurements for Parkinson's screening
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParkinsonsInput {
    pub fo: f64,
    pub fhi: f64,
    pub flo: f64,
    pub jitter_percent: f64,
    pub jitter_abs: f64,
    pub rap: f64,
    pub ppq: f64,
    pub ddp: f64,
    pub shimmer: f64,
    pub shimmer_db: f64,
    pub apq3: f64,
    pub apq5: f64,
    pub apq: f64,
    pub dda: f64,
    pub nhr: f64,
    pub hnr: f64,
    pub rpde: f64,
    pub dfa: f64,
    pub spread1: f64,
    pub spread2: f64,
    pub d2: f64,
    pub ppe: f64,
}

impl ParkinsonsInput {
    pub fn to_array(&self) -> [f64; 22] {
        [
            self.fo,
            self.fhi,
            self.flo,
            self.jitter_percent,
            self.jitter_abs,
            self.rap,
            self.ppq,
            self.ddp,
            self.shimmer,
            self.shimmer_db,
            self.apq3,
            self.apq5,
            self.apq,
            self.dda,
            self.nhr,
            self.hnr,
            self.rpde,
            self.dfa,
            self.spread1,
            self.spread2,
            self.d2,
            self.ppe,
        ]
    }

    pub fn from_array(v: [f64; 22]) -> Self {
        Self {
            fo: v[0],
            fhi: v[1],
            flo: v[2],
            jitter_percent: v[3],
            jitter_abs: v[4],
            rap: v[5],
            ppq: v[6],
            ddp: v[7],
            shimmer: v[8],
            shimmer_db: v[9],
            apq3: v[10],
            apq5: v[11],
            apq: v[12],
            dda: v[13],
            nhr: v[14],
            hnr: v[15],
            rpde: v[16],
            dfa: v[17],
            spread1: v[18],
            spread2: v[19],
            d2: v[20],
            ppe: v[21],
        }
    }
}

impl Default for ParkinsonsInput {
    fn default() -> Self {
        Self::from_array([
            150.0, 150.0, 150.0, 0.5, 0.05, 0.05, 0.05, 0.05, 0.5, 0.5, 0.05, 0.05, 0.05, 0.05,
            0.25, 15.0, 0.5, 0.5, 0.0, 0.0, 5.0, 0.5,
        ])
    }
}

impl ClinicalRecord for ParkinsonsInput {
    const DISEASE: Disease = Disease::Parkinsons;

    fn to_features(&self) -> FeatureVector {
        FeatureVector::from(self.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_defaults(disease: Disease) -> Vec<f64> {
        disease.fields().iter().map(|f| f.default).collect()
    }

    #[test]
    fn test_defaults_match_field_tables() {
        assert_eq!(DiabetesInput::default().to_features().into_inner(), table_defaults(Disease::Diabetes));
        assert_eq!(
            HeartDiseaseInput::default().to_features().into_inner(),
            table_defaults(Disease::HeartDisease)
        );
        assert_eq!(
            ParkinsonsInput::default().to_features().into_inner(),
            table_defaults(Disease::Parkinsons)
        );
    }

    #[test]
    fn test_feature_length_matches_arity() {
        assert_eq!(DiabetesInput::default().to_features().len(), DiabetesInput::DISEASE.arity());
        assert_eq!(HeartDiseaseInput::default().to_features().len(), HeartDiseaseInput::DISEASE.arity());
        assert_eq!(ParkinsonsInput::default().to_features().len(), ParkinsonsInput::DISEASE.arity());
    }

    #[test]
    fn test_diabetes_field_order() {
        let input = DiabetesInput {
            pregnancies: 1.0,
            glucose: 2.0,
            blood_pressure: 3.0,
            skin_thickness: 4.0,
            insulin: 5.0,
            bmi: 6.0,
            diabetes_pedigree_function: 7.0,
            age: 8.0,
        };
        assert_eq!(input.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_parkinsons_array_identity() {
        let mut v = [0.0; 22];
        for (i, slot) in v.iter_mut().enumerate() {
            *slot = i as f64;
        }
        let record = ParkinsonsInput::from_array(v);
        assert_eq!(record.spread1, 18.0);
        assert_eq!(record.ppe, 21.0);
        assert_eq!(record.to_array(), v);
    }
}
