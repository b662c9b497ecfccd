//! Property tests for classification

use healthassist::models::EstimatorKind;
use healthassist::schema::FormCollector;
use healthassist::{DiagnosisError, Disease, FieldValue, InferenceAdapter, ModelArtifact, ModelRegistry};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

fn registry(weight: f64) -> ModelRegistry {
    let model = |n: usize| -> Box<dyn healthassist::models::Classifier> {
        let coefficients = (0..n).map(|i| if i % 2 == 0 { weight } else { -weight }).collect();
        Box::new(ModelArtifact::linear(EstimatorKind::LogisticRegression, coefficients, 0.5))
    };
    ModelRegistry::from_classifiers(model(8), model(13), model(22)).unwrap()
}

#[derive(Debug, Clone, Copy)]
struct AnyDisease(Disease);

impl Arbitrary for AnyDisease {
    fn arbitrary(g: &mut Gen) -> Self {
        AnyDisease(*g.choose(&Disease::ALL).unwrap())
    }
}

/// Clamp arbitrary floats into a range where the linear model stays finite
fn bounded(values: &[f64], n: usize) -> Vec<FieldValue> {
    (0..n)
        .map(|i| {
            let v = values.get(i).copied().unwrap_or(0.0);
            let v = if v.is_finite() { v % 1000.0 } else { 0.0 };
            FieldValue::Float(v)
        })
        .collect()
}

#[quickcheck]
fn prop_classification_is_deterministic(disease: AnyDisease, values: Vec<f64>, weight: i8) -> bool {
    let registry = registry(f64::from(weight) / 16.0);
    let adapter = InferenceAdapter::new(&registry);
    let raw = bounded(&values, disease.0.arity());

    let first = adapter.classify(disease.0, &raw).unwrap();
    let second = adapter.classify(disease.0, &raw).unwrap();
    first == second
}

#[quickcheck]
fn prop_message_is_one_of_two_fixed_strings(disease: AnyDisease, values: Vec<f64>) -> bool {
    let registry = registry(0.3);
    let adapter = InferenceAdapter::new(&registry);
    let disease = disease.0;
    let result = adapter.classify(disease, &bounded(&values, disease.arity())).unwrap();

    let expected = if result.is_positive() {
        disease.positive_label()
    } else {
        disease.negative_label()
    };
    result.message() == expected && disease.positive_label() != disease.negative_label()
}

#[quickcheck]
fn prop_wrong_arity_is_invalid_input(disease: AnyDisease, len: u8) -> TestResult {
    let disease = disease.0;
    let len = usize::from(len) % 40;
    if len == disease.arity() {
        return TestResult::discard();
    }

    let registry = registry(1.0);
    let adapter = InferenceAdapter::new(&registry);
    let raw = vec![FieldValue::Int(1); len];
    let err = adapter.classify(disease, &raw).unwrap_err();
    TestResult::from_bool(matches!(err, DiagnosisError::InvalidInput { .. }))
}

#[quickcheck]
fn prop_numeric_text_matches_number(disease: AnyDisease, values: Vec<i32>) -> bool {
    let disease = disease.0;
    let registry = registry(0.01);
    let adapter = InferenceAdapter::new(&registry);

    let numbers: Vec<FieldValue> = (0..disease.arity())
        .map(|i| FieldValue::Int(i64::from(values.get(i).copied().unwrap_or(0))))
        .collect();
    let texts: Vec<FieldValue> = numbers.iter().map(|v| FieldValue::Text(v.to_string())).collect();

    adapter.classify(disease, &numbers).unwrap() == adapter.classify(disease, &texts).unwrap()
}

#[quickcheck]
fn prop_form_only_holds_in_range_values(disease: AnyDisease, index: u8, value: f64) -> bool {
    let disease = disease.0;
    let mut form = FormCollector::new(disease);
    let index = usize::from(index) % disease.arity();
    let _ = form.set_index(index, value);

    let all_accepted = form.entries().all(|(spec, v)| spec.accepts(v));
    all_accepted
}
