//! Interactive session state
//!
//! The only state is which page is selected and the form values on it.
//! A diagnosis is kept until the form or the page changes.

use crate::errors::Result;
use crate::inference::DiagnosisResult;
use crate::schema::{Disease, FormCollector};

/// Selected page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Prediction(Disease),
}

/// Page selection plus the form of the current prediction page
#[derive(Debug, Clone)]
pub struct SessionState {
    page: Page,
    form: Option<FormCollector>,
    last_result: Option<DiagnosisResult>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            form: None,
            last_result: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch page; prediction pages start from widget defaults
    pub fn select(&mut self, page: Page) {
        self.page = page;
        self.form = match page {
            Page::Home => None,
            Page::Prediction(disease) => Some(FormCollector::new(disease)),
        };
        self.last_result = None;
    }

    pub fn form(&self) -> Option<&FormCollector> {
        self.form.as_ref()
    }

    /// Apply `NAME=VALUE` to the current form
    ///
    /// Returns `Ok(false)` when no prediction page is selected.
    pub fn apply(&mut self, assignment: &str) -> Result<bool> {
        match self.form.as_mut() {
            Some(form) => {
                form.apply(assignment)?;
                self.last_result = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Restore the current form to its defaults
    pub fn reset(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.reset();
        }
        self.last_result = None;
    }

    pub fn record_result(&mut self, result: DiagnosisResult) {
        self.last_result = Some(result);
    }

    pub fn last_result(&self) -> Option<&DiagnosisResult> {
        self.last_result.as_ref()
    }

    /// Prompt text for the current page
    pub fn prompt(&self) -> String {
        match self.page {
            Page::Home => "healthassist> ".to_string(),
            Page::Prediction(disease) => format!("healthassist/{}> ", disease.id()),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;

    #[test]
    fn test_starts_on_home() {
        let state = SessionState::new();
        assert_eq!(state.page(), Page::Home);
        assert!(state.form().is_none());
        assert_eq!(state.prompt(), "healthassist> ");
    }

    #[test]
    fn test_select_prediction_page() {
        let mut state = SessionState::new();
        state.select(Page::Prediction(Disease::HeartDisease));
        assert_eq!(state.form().unwrap().disease(), Disease::HeartDisease);
        assert_eq!(state.prompt(), "healthassist/heart_disease> ");
    }

    #[test]
    fn test_apply_on_home_is_noop() {
        let mut state = SessionState::new();
        assert!(!state.apply("Glucose=120").unwrap());
    }

    #[test]
    fn test_changes_clear_result() {
        let mut state = SessionState::new();
        state.select(Page::Prediction(Disease::Diabetes));
        state.record_result(DiagnosisResult::new(Disease::Diabetes, Label::Negative));
        assert!(state.last_result().is_some());

        state.apply("Glucose=150").unwrap();
        assert!(state.last_result().is_none());

        state.record_result(DiagnosisResult::new(Disease::Diabetes, Label::Negative));
        state.select(Page::Home);
        assert!(state.last_result().is_none());
    }

    #[test]
    fn test_rejected_value_keeps_result() {
        let mut state = SessionState::new();
        state.select(Page::Prediction(Disease::Diabetes));
        state.record_result(DiagnosisResult::new(Disease::Diabetes, Label::Positive));
        assert!(state.apply("Glucose=999").is_err());
        assert!(state.last_result().is_some());
    }

    #[test]
    fn test_switching_pages_resets_form() {
        let mut state = SessionState::new();
        state.select(Page::Prediction(Disease::Diabetes));
        state.apply("Age=55").unwrap();
        state.select(Page::Prediction(Disease::Diabetes));
        assert_eq!(state.form().unwrap().get("Age"), Some(30.0));
    }
}
