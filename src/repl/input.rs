//! Line editing for the interactive shell
//!
//! Wraps a rustyline editor with persistent history and tab completion of
//! shell commands and the field names of the current prediction page.

use crate::repl::commands::COMMANDS;
use crate::repl::session::Page;
use crate::schema::Disease;
use anyhow::Result;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::{DefaultHistory, History};
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::path::PathBuf;

/// Completion source for the shell
#[derive(Debug, Default)]
pub struct ShellHelper {
    disease: Option<Disease>,
}

impl ShellHelper {
    /// Candidates for the word ending at `pos`, with the word's start offset
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let head = &line[..pos];
        let start = head.rfind(char::is_whitespace).map(|i| i + 1).unwrap_or(0);
        let word = &head[start..];
        let prefix = word.to_lowercase();

        if start == 0 && word.starts_with('/') {
            let matches = COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(prefix.as_str()))
                .map(|cmd| cmd.to_string())
                .collect();
            return (start, matches);
        }

        match self.disease {
            Some(disease) if !word.contains('=') => {
                let matches = disease
                    .fields()
                    .iter()
                    .filter(|f| f.name.to_lowercase().starts_with(&prefix))
                    .map(|f| format!("{}=", f.name))
                    .collect();
                (start, matches)
            }
            _ => (start, Vec::new()),
        }
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(line, pos);
        let pairs = matches
            .into_iter()
            .map(|m| Pair {
                display: m.clone(),
                replacement: m,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

/// Input handler managing the readline interface and history
pub struct InputHandler {
    editor: Editor<ShellHelper, DefaultHistory>,
    history_path: Option<PathBuf>,
    prompt: String,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Create input handler with history loaded from and saved to `history_file`
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        Self::build(Some(history_file))
    }

    fn build(history_path: Option<PathBuf>) -> Result<Self> {
        let mut editor = Editor::<ShellHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellHelper::default()));

        if let Some(path) = history_path.as_ref().filter(|p| p.exists()) {
            if let Err(e) = editor.load_history(path) {
                tracing::warn!(path = %path.display(), error = %e, "could not read shell history");
            }
        }

        Ok(InputHandler {
            editor,
            history_path,
            prompt: "healthassist> ".to_string(),
        })
    }

    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Point field-name completion at the page being shown
    pub fn set_page(&mut self, page: Page) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.disease = match page {
                Page::Home => None,
                Page::Prediction(disease) => Some(disease),
            };
        }
    }

    /// Read one trimmed line
    ///
    /// `Ok(None)` means end of input. Ctrl-C abandons the line being typed
    /// and yields an empty line.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let line = interpret(self.editor.readline(&self.prompt))?;
        if let Some(entry) = line.as_deref().filter(|l| !l.is_empty()) {
            let _ = self.editor.add_history_entry(entry);
        }
        Ok(line)
    }

    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            self.editor.save_history(path)?;
        }
        Ok(())
    }

    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }
}

fn interpret(result: rustyline::Result<String>) -> Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
        Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn helper(disease: Option<Disease>) -> ShellHelper {
        ShellHelper { disease }
    }

    #[test]
    fn test_complete_commands() {
        let (start, matches) = helper(None).candidates("/he", 3);
        assert_eq!(start, 0);
        assert_eq!(matches, vec!["/help", "/heart"]);

        let (_, matches) = helper(None).candidates("/PARK", 5);
        assert_eq!(matches, vec!["/parkinsons"]);
    }

    #[test]
    fn test_complete_fields_on_page() {
        let (start, matches) = helper(Some(Disease::Diabetes)).candidates("gl", 2);
        assert_eq!(start, 0);
        assert_eq!(matches, vec!["Glucose="]);

        let (start, matches) = helper(Some(Disease::Diabetes)).candidates("/set Diab", 9);
        assert_eq!(start, 5);
        assert_eq!(matches, vec!["DiabetesPedigreeFunction="]);
    }

    #[test]
    fn test_no_field_completion_on_home_or_after_equals() {
        assert!(helper(None).candidates("Glu", 3).1.is_empty());
        assert!(helper(Some(Disease::Diabetes)).candidates("Glucose=1", 9).1.is_empty());
    }

    #[test]
    fn test_set_page_updates_completion() {
        let mut handler = InputHandler::new().unwrap();
        handler.set_page(Page::Prediction(Disease::HeartDisease));
        let helper = handler.editor.helper().unwrap();
        assert_eq!(helper.candidates("tha", 3).1, vec!["thalach=", "thal="]);

        handler.set_page(Page::Home);
        assert!(handler.editor.helper().unwrap().candidates("tha", 3).1.is_empty());
    }

    #[test]
    fn test_interrupt_abandons_line_only() {
        assert_eq!(interpret(Err(ReadlineError::Interrupted)).unwrap(), Some(String::new()));
        assert_eq!(interpret(Err(ReadlineError::Eof)).unwrap(), None);
        assert_eq!(interpret(Ok("  Age=40 ".to_string())).unwrap(), Some("Age=40".to_string()));
    }

    #[test]
    fn test_history_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("nested").join("history");

        {
            let mut handler = InputHandler::with_history(history_path.clone()).unwrap();
            let _ = handler.editor.add_history_entry("/diabetes");
            let _ = handler.editor.add_history_entry("Glucose=140");
            handler.save_history().unwrap();
        }

        assert!(history_path.exists());

        let handler = InputHandler::with_history(history_path).unwrap();
        assert_eq!(handler.history_len(), 2);
    }
}
