//! Field tables for each disease form
//!
//! Order is the contract with the trained model: position `i` here is
//! feature `i` of the vector. Bounds and defaults are the widget bounds
//! presented to the user.

/// A single bounded input widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Column name used during training
    pub name: &'static str,
    /// Prompt shown to the user
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    /// Whole numbers only
    pub integer: bool,
}

impl FieldSpec {
    const fn int(name: &'static str, label: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self { name, label, min, max, default, step: 1.0, integer: true }
    }

    const fn float(name: &'static str, label: &'static str, min: f64, max: f64, default: f64, step: f64) -> Self {
        Self { name, label, min, max, default, step, integer: false }
    }

    /// Whether `value` is allowed by this widget
    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite()
            && value >= self.min
            && value <= self.max
            && (!self.integer || value.fract() == 0.0)
    }

    /// Human-readable bounds, e.g. `[0, 200]`
    pub fn bounds(&self) -> String {
        if self.integer {
            format!("[{}, {}]", self.min, self.max)
        } else {
            format!("[{:.2}, {:.2}]", self.min, self.max)
        }
    }
}

pub const DIABETES_FIELDS: [FieldSpec; 8] = [
    FieldSpec::int("Pregnancies", "Number of Pregnancies", 0.0, 20.0, 0.0),
    FieldSpec::int("Glucose", "Glucose Level", 0.0, 200.0, 100.0),
    FieldSpec::int("BloodPressure", "Blood Pressure value", 0.0, 150.0, 80.0),
    FieldSpec::int("SkinThickness", "Skin Thickness value", 0.0, 100.0, 20.0),
    FieldSpec::int("Insulin", "Insulin Level", 0.0, 300.0, 100.0),
    FieldSpec::int("BMI", "BMI value", 0.0, 50.0, 25.0),
    FieldSpec::float("DiabetesPedigreeFunction", "Diabetes Pedigree Function value", 0.0, 2.0, 0.5, 0.1),
    FieldSpec::int("Age", "Age of the Person", 0.0, 120.0, 30.0),
];

pub const HEART_DISEASE_FIELDS: [FieldSpec; 13] = [
    FieldSpec::int("age", "Age", 20.0, 100.0, 40.0),
    FieldSpec::int("sex", "Sex (0 for female, 1 for male)", 0.0, 1.0, 1.0),
    FieldSpec::int("cp", "Chest Pain types", 0.0, 3.0, 1.0),
    FieldSpec::int("trestbps", "Resting Blood Pressure", 80.0, 200.0, 120.0),
    FieldSpec::int("chol", "Serum Cholestoral in mg/dl", 100.0, 600.0, 200.0),
    FieldSpec::int("fbs", "Fasting Blood Sugar > 120 mg/dl", 0.0, 1.0, 0.0),
    FieldSpec::int("restecg", "Resting Electrocardiographic results", 0.0, 2.0, 0.0),
    FieldSpec::int("thalach", "Maximum Heart Rate achieved", 50.0, 220.0, 150.0),
    FieldSpec::int("exang", "Exercise Induced Angina", 0.0, 1.0, 0.0),
    FieldSpec::float("oldpeak", "ST depression induced by exercise", 0.0, 10.0, 0.0, 0.1),
    FieldSpec::int("slope", "Slope of the peak exercise ST segment", 0.0, 2.0, 1.0),
    FieldSpec::int("ca", "Major vessels colored by flourosopy", 0.0, 4.0, 0.0),
    FieldSpec::int("thal", "thal: 0 = normal; 1 = fixed defect; 2 = reversable defect", 0.0, 2.0, 1.0),
];

pub const PARKINSONS_FIELDS: [FieldSpec; 22] = [
    FieldSpec::float("MDVP:Fo(Hz)", "MDVP:Fo(Hz)", 0.0, 300.0, 150.0, 0.01),
    FieldSpec::float("MDVP:Fhi(Hz)", "MDVP:Fhi(Hz)", 0.0, 300.0, 150.0, 0.01),
    FieldSpec::float("MDVP:Flo(Hz)", "MDVP:Flo(Hz)", 0.0, 300.0, 150.0, 0.01),
    FieldSpec::float("MDVP:Jitter(%)", "MDVP:Jitter(%)", 0.0, 2.0, 0.5, 0.01),
    FieldSpec::float("MDVP:Jitter(Abs)", "MDVP:Jitter(Abs)", 0.0, 0.1, 0.05, 0.001),
    FieldSpec::float("MDVP:RAP", "MDVP:RAP", 0.0, 0.1, 0.05, 0.001),
    FieldSpec::float("MDVP:PPQ", "MDVP:PPQ", 0.0, 0.1, 0.05, 0.001),
    FieldSpec::float("Jitter:DDP", "Jitter:DDP", 0.0, 0.1, 0.05, 0.001),
    FieldSpec::float("MDVP:Shimmer", "MDVP:Shimmer", 0.0, 1.0, 0.5, 0.01),
    FieldSpec::float("MDVP:Shimmer(dB)", "MDVP:Shimmer(dB)", 0.0, 1.0, 0.5, 0.01),
    FieldSpec::float("Shimmer:APQ3", "Shimmer:APQ3", 0.0, 0.1, 0.05, 0.001),
    FieldSpec::float("Shimmer:APQ5", "Shimmer:APQ5", 0.0, 0.1, 0.05, 0.001),
    FieldSpec::float("MDVP:APQ", "MDVP:APQ", 0.0, 0.1, 0.05, 0.001),
    FieldSpec::float("Shimmer:DDA", "Shimmer:DDA", 0.0, 0.1, 0.05, 0.001),
    FieldSpec::float("NHR", "NHR", 0.0, 0.5, 0.25, 0.01),
    FieldSpec::float("HNR", "HNR", 0.0, 30.0, 15.0, 0.01),
    FieldSpec::float("RPDE", "RPDE", 0.0, 1.0, 0.5, 0.01),
    FieldSpec::float("DFA", "DFA", 0.0, 1.0, 0.5, 0.01),
    FieldSpec::float("spread1", "spread1", -1.0, 1.0, 0.0, 0.01),
    FieldSpec::float("spread2", "spread2", -1.0, 1.0, 0.0, 0.01),
    FieldSpec::float("D2", "D2", 0.0, 10.0, 5.0, 0.01),
    FieldSpec::float("PPE", "PPE", 0.0, 1.0, 0.5, 0.01),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn check_table(fields: &[FieldSpec]) {
        for field in fields {
            assert!(field.min <= field.max, "{} bounds inverted", field.name);
            assert!(field.accepts(field.default), "{} default out of bounds", field.name);
            assert!(field.step > 0.0);
        }
    }

    #[test]
    fn test_defaults_within_bounds() {
        check_table(&DIABETES_FIELDS);
        check_table(&HEART_DISEASE_FIELDS);
        check_table(&PARKINSONS_FIELDS);
    }

    #[test]
    fn test_field_names_unique() {
        for table in [&DIABETES_FIELDS[..], &HEART_DISEASE_FIELDS[..], &PARKINSONS_FIELDS[..]] {
            let mut names: Vec<_> = table.iter().map(|f| f.name.to_lowercase()).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), table.len());
        }
    }

    #[test]
    fn test_accepts_integer_widget() {
        let glucose = DIABETES_FIELDS[1];
        assert!(glucose.accepts(120.0));
        assert!(!glucose.accepts(120.5));
        assert!(!glucose.accepts(201.0));
        assert!(!glucose.accepts(f64::NAN));
    }

    #[test]
    fn test_accepts_negative_range() {
        let spread1 = PARKINSONS_FIELDS[18];
        assert_eq!(spread1.name, "spread1");
        assert!(spread1.accepts(-0.75));
        assert!(!spread1.accepts(-1.5));
    }
}
