//! Display manager for terminal output
//!
//! Renders the home page, form pages, and diagnosis results with
//! color-coded output.

use crate::inference::DiagnosisResult;
use crate::schema::{Disease, FormCollector};
use colored::*;
use std::io::{self, Write};

/// Display manager for terminal UI
pub struct DisplayManager {
    width: usize,
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager { width: 64 }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let rule = "=".repeat(self.width);
        println!("\n{}", rule.cyan());
        println!("{}", format!("  Health Assistant {} - Multiple Disease Prediction", version).bold().cyan());
        println!("{}", "  Pages: Home | Diabetes | Heart Disease | Parkinson's".dimmed());
        println!("{}\n", rule.cyan());
        println!(
            "Type {} for commands, {} to quit\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Home page: what the tool does and the three diseases
    pub fn show_about(&self) {
        println!("\n{}", "Welcome to Health Assistant".bold().cyan());
        println!("{}", "=".repeat(self.width).cyan());
        println!(
            "This application provides prediction for three diseases: Diabetes, Heart Disease, and \
             Parkinson's Disease. Select the corresponding page to make predictions."
        );

        for disease in Disease::ALL {
            let about = disease.about();
            println!("\n{}", format!("{}:", disease.title()).bold());
            println!("  {}", about.summary);
            println!("  {} {}", "Symptoms:".bold(), about.symptoms);
            println!("  {} {}", "Learn more:".dimmed(), about.link.underline());
        }
        println!();
    }

    /// Field table for a schema
    pub fn show_schema(&self, disease: Disease) {
        println!(
            "\n{}",
            format!("{} ({} fields, in model order)", disease.title(), disease.arity())
                .bold()
                .cyan()
        );
        println!("{}", "=".repeat(self.width).cyan());
        for (i, field) in disease.fields().iter().enumerate() {
            println!(
                "  {:>2}. {:<26} {:<16} default {}",
                i,
                field.name.green(),
                field.bounds(),
                field.default
            );
            if field.label != field.name {
                println!("      {}", field.label.dimmed());
            }
        }
        println!();
    }

    /// Current values of a form page
    pub fn show_form(&self, form: &FormCollector) {
        let disease = form.disease();
        println!("\n{}", format!("{} Prediction", disease.title()).bold().cyan());
        println!("{}", "=".repeat(self.width).cyan());
        for (i, (field, value)) in form.entries().enumerate() {
            let marker = if value != field.default { "*".yellow() } else { " ".normal() };
            println!(
                "  {:>2}.{}{:<26} {:<10} {}",
                i,
                marker,
                field.name.green(),
                value,
                field.bounds().as_str().dimmed()
            );
        }
        println!(
            "\nSet values with {} then {} for the test result\n",
            "NAME=VALUE".cyan(),
            "/run".cyan()
        );
    }

    /// Diagnosis banner
    pub fn show_result(&self, result: &DiagnosisResult) {
        let message = result.message();
        if result.is_positive() {
            println!("\n  {} {}\n", "●".yellow(), message.bold().yellow());
        } else {
            println!("\n  {} {}\n", "●".green(), message.bold().green());
        }
    }

    /// Show error message
    pub fn show_error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message.red());
    }

    /// Show info message
    pub fn show_info(&self, message: &str) {
        println!("{} {}", "ℹ".cyan(), message);
    }

    /// Show success message
    pub fn show_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message.green());
    }

    /// Clear the terminal
    pub fn clear(&self) -> io::Result<()> {
        print!("\x1B[2J\x1B[1;1H");
        io::stdout().flush()
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
