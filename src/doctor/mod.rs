//! Doctor command for diagnostics
//!
//! Checks the configuration and every model artifact before a session
//! relies on them.

use crate::config::Config;
use crate::models::registry::load_for_schema;
use crate::models::types::format_size;
use crate::models::{Classifier, ModelPaths};
use crate::schema::{Disease, FeatureVector};
use colored::*;

/// Health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Pass(String),
    Warn(String),
    Fail(String),
}

/// Individual health check
#[derive(Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
}

/// Doctor diagnostics system
pub struct Doctor {
    config: Config,
    config_error: Option<String>,
    paths: ModelPaths,
}

impl Doctor {
    /// Create a new doctor instance
    pub fn new(config: Config, paths: ModelPaths) -> Self {
        Self {
            config,
            config_error: None,
            paths,
        }
    }

    /// Report a configuration file that failed to load
    pub fn with_config_error(mut self, error: impl ToString) -> Self {
        self.config_error = Some(error.to_string());
        self
    }

    /// Run all health checks
    pub fn run_diagnostics(&self) -> Vec<HealthCheck> {
        let mut checks = vec![self.check_config()];
        for disease in Disease::ALL {
            checks.push(self.check_artifact(disease));
        }
        checks
    }

    fn check_config(&self) -> HealthCheck {
        let status = match (&self.config_error, self.config.validate()) {
            (Some(error), _) => HealthStatus::Fail(error.clone()),
            (None, Ok(())) => HealthStatus::Pass("valid".to_string()),
            (None, Err(e)) => HealthStatus::Fail(e.to_string()),
        };
        HealthCheck {
            name: "Configuration".to_string(),
            status,
        }
    }

    /// Artifact exists, parses, and fits its schema
    fn check_artifact(&self, disease: Disease) -> HealthCheck {
        let path = self.paths.get(disease);
        let name = format!("{} model", disease.title());

        if !path.exists() {
            return HealthCheck {
                name,
                status: HealthStatus::Fail(format!("{} not found", path.display())),
            };
        }

        let status = match load_for_schema(disease, path) {
            Ok(artifact) => {
                let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                let mut detail = format!("{}, {}", artifact.describe(), format_size(size));
                let defaults = FeatureVector::new(disease.fields().iter().map(|f| f.default).collect());
                if let Ok(Some(p)) = artifact.probability(&defaults) {
                    detail.push_str(&format!(", p={:.2} at form defaults", p));
                }
                if artifact.feature_names().is_none() {
                    HealthStatus::Warn(format!("{}; no feature names to verify field order", detail))
                } else {
                    HealthStatus::Pass(detail)
                }
            }
            Err(e) => HealthStatus::Fail(e.to_string()),
        };

        HealthCheck { name, status }
    }

    /// Print diagnostic report
    pub fn print_report(checks: &[HealthCheck]) {
        println!("\n{}", "Health Assistant Diagnostics".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        for check in checks {
            let (symbol, message) = match &check.status {
                HealthStatus::Pass(msg) => ("✓".green(), msg.normal()),
                HealthStatus::Warn(msg) => ("⚠".yellow(), msg.yellow()),
                HealthStatus::Fail(msg) => ("✗".red(), msg.red()),
            };
            println!("{:<24} {} {}", check.name, symbol, message);
        }

        println!();
    }

    /// Get overall health status
    pub fn overall_status(checks: &[HealthCheck]) -> bool {
        !checks.iter().any(|c| matches!(c.status, HealthStatus::Fail(_)))
    }
}
