//! Command handler for the interactive shell
//!
//! Parses `/` commands and bare `NAME=VALUE` assignments, and executes
//! them against the session state.

use crate::errors::DiagnosisError;
use crate::inference::InferenceAdapter;
use crate::repl::display::DisplayManager;
use crate::repl::session::{Page, SessionState};
use crate::schema::Disease;
use anyhow::Result;
use colored::*;

/// Shell command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Home,
    Select(Disease),
    Set { assignment: String },
    Show,
    Run,
    Reset,
    Clear,
    Exit,
    Unknown { input: String },
}

/// Command words offered by tab completion
pub const COMMANDS: &[&str] = &[
    "/help",
    "/home",
    "/diabetes",
    "/heart",
    "/parkinsons",
    "/set",
    "/show",
    "/run",
    "/reset",
    "/clear",
    "/exit",
    "/quit",
];

/// Check if input is a command or an assignment
pub fn is_command(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.starts_with('/') || trimmed.contains('=')
}

/// Command handler for parsing and executing shell commands
#[derive(Debug, Default)]
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        CommandHandler
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        let Some(rest) = trimmed.strip_prefix('/') else {
            if trimmed.contains('=') {
                return Command::Set { assignment: trimmed.to_string() };
            }
            return Command::Unknown { input: input.to_string() };
        };

        let parts: Vec<&str> = rest.split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown { input: input.to_string() };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "home" => Command::Home,
            "diabetes" => Command::Select(Disease::Diabetes),
            "heart" => Command::Select(Disease::HeartDisease),
            "parkinsons" | "parkinson" => Command::Select(Disease::Parkinsons),
            "set" if parts.len() > 1 => Command::Set {
                assignment: parts[1..].join(""),
            },
            "show" | "form" => Command::Show,
            "run" | "predict" => Command::Run,
            "reset" => Command::Reset,
            "clear" | "cls" => Command::Clear,
            "exit" | "quit" | "q" => Command::Exit,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Execute a command
    ///
    /// Returns true if the shell should continue, false if it should exit.
    pub fn execute(
        &self,
        command: Command,
        state: &mut SessionState,
        adapter: &InferenceAdapter<'_>,
        display: &DisplayManager,
    ) -> Result<bool> {
        match command {
            Command::Help => self.show_help(),
            Command::Home => {
                state.select(Page::Home);
                display.show_about();
            }
            Command::Select(disease) => {
                state.select(Page::Prediction(disease));
                if let Some(form) = state.form() {
                    display.show_form(form);
                }
            }
            Command::Set { assignment } => match state.apply(&assignment) {
                Ok(true) => {}
                Ok(false) => display.show_info("Select a prediction page first (/diabetes, /heart, /parkinsons)"),
                Err(e) => display.show_error(&e.to_string()),
            },
            Command::Show => match state.form() {
                Some(form) => {
                    display.show_form(form);
                    if let Some(result) = state.last_result() {
                        display.show_result(result);
                    }
                }
                None => display.show_about(),
            },
            Command::Run => self.run_prediction(state, adapter, display),
            Command::Reset => {
                state.reset();
                println!("{}", "Form reset to defaults.".yellow());
            }
            Command::Clear => display.clear()?,
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                return Ok(false);
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
            }
        }
        Ok(true)
    }

    fn run_prediction(&self, state: &mut SessionState, adapter: &InferenceAdapter<'_>, display: &DisplayManager) {
        let Some(form) = state.form() else {
            display.show_info("Select a prediction page first (/diabetes, /heart, /parkinsons)");
            return;
        };

        match adapter.classify(form.disease(), &form.values()) {
            Ok(result) => {
                display.show_result(&result);
                state.record_result(result);
            }
            Err(e @ DiagnosisError::InvalidInput { .. }) => {
                display.show_error(&format!("Submission rejected: {}", e));
            }
            Err(e) => {
                tracing::warn!(error = %e, "prediction failed");
                display.show_error("Prediction failed. Check the model artifacts with 'healthassist doctor'.");
            }
        }
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = [
            ("/home", "Show the home page"),
            ("/diabetes", "Open the diabetes prediction page"),
            ("/heart", "Open the heart disease prediction page"),
            ("/parkinsons", "Open the Parkinson's prediction page"),
            ("NAME=VALUE", "Set a field on the current page"),
            ("/show", "Show current field values"),
            ("/run", "Get the test result"),
            ("/reset", "Restore default values"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pages() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/home"), Command::Home);
        assert_eq!(handler.parse("/diabetes"), Command::Select(Disease::Diabetes));
        assert_eq!(handler.parse("/HEART"), Command::Select(Disease::HeartDisease));
        assert_eq!(handler.parse("/parkinsons"), Command::Select(Disease::Parkinsons));
    }

    #[test]
    fn test_parse_assignment() {
        let handler = CommandHandler::new();
        assert_eq!(
            handler.parse("Glucose=140"),
            Command::Set { assignment: "Glucose=140".to_string() }
        );
        assert_eq!(
            handler.parse("/set Glucose = 140"),
            Command::Set { assignment: "Glucose=140".to_string() }
        );
    }

    #[test]
    fn test_parse_misc() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/run"), Command::Run);
        assert_eq!(handler.parse("/q"), Command::Exit);
        assert_eq!(handler.parse("/show"), Command::Show);
        assert!(matches!(handler.parse("/unknown"), Command::Unknown { .. }));
        assert!(matches!(handler.parse("hello"), Command::Unknown { .. }));
        assert!(matches!(handler.parse("/set"), Command::Unknown { .. }));
    }

    #[test]
    fn test_completion_words_parse() {
        let handler = CommandHandler::new();
        for word in COMMANDS.iter().filter(|w| **w != "/set") {
            assert!(
                !matches!(handler.parse(word), Command::Unknown { .. }),
                "{} is not a command",
                word
            );
        }
    }

    #[test]
    fn test_is_command() {
        assert!(is_command("/help"));
        assert!(is_command("Age=40"));
        assert!(!is_command("hello"));
    }
}
