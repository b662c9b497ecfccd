//! Configuration management for healthassist
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.healthassist/config.toml

use crate::errors::{DiagnosisError, Result};
use crate::models::ModelPaths;
use crate::schema::Disease;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Model artifact locations
///
/// File names are resolved against `dir` unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub dir: String,
    pub diabetes: String,
    pub heart_disease: String,
    pub parkinsons: String,
}

/// Terminal output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_verbosity: String,
    pub color_output: bool,
}

/// File system paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub history_file: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: "saved_models".to_string(),
            diabetes: Disease::Diabetes.artifact_file_name().to_string(),
            heart_disease: Disease::HeartDisease.artifact_file_name().to_string(),
            parkinsons: Disease::Parkinsons.artifact_file_name().to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
            color_output: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            history_file: "~/.healthassist/history".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DiagnosisError::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_toml(&contents)
    }

    /// Parse and validate TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| DiagnosisError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".healthassist").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("models.diabetes", &self.models.diabetes),
            ("models.heart_disease", &self.models.heart_disease),
            ("models.parkinsons", &self.models.parkinsons),
        ] {
            if value.trim().is_empty() {
                return Err(DiagnosisError::ConfigError(format!("{} must not be empty", key)));
            }
        }

        match self.display.default_verbosity.as_str() {
            "quiet" | "normal" | "verbose" | "very_verbose" => {}
            _ => {
                return Err(DiagnosisError::ConfigError(format!(
                    "Invalid verbosity level: {}",
                    self.display.default_verbosity
                )))
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| DiagnosisError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DiagnosisError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DiagnosisError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Resolve artifact paths, optionally overriding the models directory
    pub fn model_paths(&self, dir_override: Option<&Path>) -> ModelPaths {
        let dir = dir_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| Self::expand_path(&self.models.dir));
        let resolve = |file: &str| {
            let file = Self::expand_path(file);
            if file.is_absolute() {
                file
            } else {
                dir.join(file)
            }
        };

        ModelPaths {
            diabetes: resolve(&self.models.diabetes),
            heart_disease: resolve(&self.models.heart_disease),
            parkinsons: resolve(&self.models.parkinsons),
        }
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get history file path
    pub fn history_file(&self) -> PathBuf {
        Self::expand_path(&self.paths.history_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.models.dir, "saved_models");
        assert!(config.display.color_output);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_model_paths() {
        let paths = Config::default().model_paths(None);
        assert_eq!(paths, ModelPaths::in_dir("saved_models"));
    }

    #[test]
    fn test_model_paths_override_dir() {
        let paths = Config::default().model_paths(Some(Path::new("/opt/models")));
        assert_eq!(paths.heart_disease, PathBuf::from("/opt/models/heart_disease_model.json"));
    }

    #[test]
    fn test_absolute_file_ignores_dir() {
        let mut config = Config::default();
        config.models.parkinsons = "/srv/pk.json".to_string();
        let paths = config.model_paths(None);
        assert_eq!(paths.parkinsons, PathBuf::from("/srv/pk.json"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("[models]\ndir = \"artifacts\"\n").unwrap();
        assert_eq!(config.models.dir, "artifacts");
        assert_eq!(config.models.diabetes, "diabetes_model.json");
        assert_eq!(config.display.default_verbosity, "normal");
    }

    #[test]
    fn test_config_validation_verbosity() {
        let mut config = Config::default();
        config.display.default_verbosity = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_file() {
        let mut config = Config::default();
        config.models.diabetes = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.models.dir = "elsewhere".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path("~/.healthassist");
        assert!(!expanded.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        let path = "/absolute/path";
        assert_eq!(Config::expand_path(path).to_string_lossy(), path);
    }
}
