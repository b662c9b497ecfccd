//! Interactive prediction shell
//!
//! Stands in for the dashboard: a home page, one form page per disease,
//! and a command to submit the form for a diagnosis.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;
use std::path::PathBuf;

use crate::inference::InferenceAdapter;
use crate::models::ModelRegistry;
use crate::repl::commands::{is_command, CommandHandler};
pub use crate::repl::display::DisplayManager;
use crate::repl::input::InputHandler;
pub use crate::repl::session::{Page, SessionState};

/// Shell session coordinator
///
/// Borrows the registry loaded at startup for its whole lifetime.
pub struct ReplSession<'a> {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    state: SessionState,
    display_manager: DisplayManager,
    adapter: InferenceAdapter<'a>,
}

impl<'a> ReplSession<'a> {
    /// Create a new session
    pub fn new(registry: &'a ModelRegistry) -> Result<Self> {
        Self::with_input(registry, InputHandler::new()?)
    }

    /// Create a session with persistent history
    pub fn with_history(registry: &'a ModelRegistry, history_path: PathBuf) -> Result<Self> {
        Self::with_input(registry, InputHandler::with_history(history_path)?)
    }

    fn with_input(registry: &'a ModelRegistry, input_handler: InputHandler) -> Result<Self> {
        Ok(ReplSession {
            input_handler,
            command_handler: CommandHandler::new(),
            state: SessionState::new(),
            display_manager: DisplayManager::new(),
            adapter: InferenceAdapter::new(registry),
        })
    }

    /// Show welcome banner and the home page
    pub fn show_welcome(&self, version: &str) {
        self.display_manager.show_banner(version);
        self.display_manager.show_about();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Read a line of input from user
    pub fn read_input(&mut self) -> Result<Option<String>> {
        self.input_handler.set_prompt(self.state.prompt());
        self.input_handler.set_page(self.state.page());
        self.input_handler.read_line()
    }

    /// Handle one line of user input
    ///
    /// Returns true if session should continue, false to exit
    pub fn handle_input(&mut self, input: &str) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(true);
        }

        if !is_command(input) {
            self.display_manager
                .show_info("Enter a command (see /help) or a NAME=VALUE assignment");
            return Ok(true);
        }

        let command = self.command_handler.parse(input);
        self.command_handler
            .execute(command, &mut self.state, &self.adapter, &self.display_manager)
    }

    /// Run the read-eval-print loop until `/exit` or EOF
    ///
    /// Ctrl-C only discards the line being typed.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let input = match self.read_input() {
                Ok(Some(input)) => input,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal input failed");
                    break;
                }
            };

            if !self.handle_input(&input)? {
                break;
            }
        }

        self.save()
    }

    /// Persist input history
    pub fn save(&mut self) -> Result<()> {
        self.input_handler.save_history()
    }
}
