//! Command-line argument parsing for healthassist
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use crate::schema::Disease;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// healthassist - Multiple disease prediction from clinical measurements
#[derive(Parser, Debug)]
#[command(name = "healthassist")]
#[command(version)]
#[command(about = "Predict diabetes, heart disease and Parkinson's disease with pre-trained models", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the model artifacts (overrides config)
    #[arg(long, global = true)]
    pub models_dir: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only print the diagnosis)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Classify one set of measurements
    Predict {
        /// Disease model to use
        #[arg(value_enum)]
        disease: Disease,

        /// All field values in schema order
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<String>,

        /// Override a single field, starting from the defaults (NAME=VALUE)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },

    /// Show the input fields of a schema
    Schema {
        #[arg(value_enum)]
        disease: Option<Disease>,
    },

    /// Describe the supported diseases
    About,

    /// Start the interactive prediction shell
    Start,

    /// Check configuration and model artifacts
    Doctor,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Check argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if let Some(Commands::Predict { disease, values, set }) = &self.command {
            if !values.is_empty() && !set.is_empty() {
                return Err("Give either all VALUES or --set overrides, not both.".to_string());
            }
            if !values.is_empty() && values.len() != disease.arity() {
                return Err(format!(
                    "{} expects {} values, got {}. Run 'healthassist schema {}' to list them.",
                    disease.title(),
                    disease.arity(),
                    values.len(),
                    disease.id()
                ));
            }
        }
        Ok(())
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse a config verbosity name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Default tracing filter for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if decorative output (banners, headings) should be shown
    pub fn show_decorations(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
