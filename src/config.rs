//! Configuration management for the `TripAI` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings. The resulting
//! configuration object is passed explicitly into the components that need
//! it; nothing reads the process environment after startup.

use crate::TripAiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripAI` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripAiConfig {
    /// Language-model endpoint configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Interactive intake configuration
    #[serde(default)]
    pub intake: IntakeConfig,
}

/// Language-model endpoint configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the local Ollama endpoint
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds, applied to the HTTP client
    #[serde(default = "default_llm_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Interactive intake configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Invalid entries tolerated per field before intake fails
    #[serde(default = "default_max_input_attempts")]
    pub max_input_attempts: u32,
}

// Default value functions
fn default_llm_base_url() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_llm_model() -> String {
    "llama2".to_string()
}

fn default_llm_temperature() -> f32 {
    0.7
}

fn default_llm_timeout() -> u32 {
    1200
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_max_input_attempts() -> u32 {
    3
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            temperature: default_llm_temperature(),
            timeout_seconds: default_llm_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_input_attempts: default_max_input_attempts(),
        }
    }
}

impl Default for TripAiConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            logging: LoggingConfig::default(),
            intake: IntakeConfig::default(),
        }
    }
}

impl TripAiConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPAI_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPAI")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripAiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripai").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_llm()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the language-model endpoint settings
    fn validate_llm(&self) -> Result<()> {
        if self.llm.model.trim().is_empty() {
            return Err(TripAiError::config("Model name cannot be empty").into());
        }

        if !self.llm.base_url.starts_with("http://") && !self.llm.base_url.starts_with("https://") {
            return Err(TripAiError::config(
                "LLM base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(TripAiError::config(
                "Sampling temperature must be between 0.0 and 2.0",
            )
            .into());
        }

        if self.llm.timeout_seconds == 0 {
            return Err(TripAiError::config("LLM timeout cannot be zero").into());
        }

        if self.llm.timeout_seconds > 3600 {
            return Err(TripAiError::config(
                "LLM timeout cannot exceed 3600 seconds",
            )
            .into());
        }

        if self.intake.max_input_attempts == 0 {
            return Err(TripAiError::config(
                "Intake must allow at least one input attempt",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripAiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripAiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TripAiConfig::default();
        assert_eq!(config.llm.base_url, "http://127.0.0.1:11434");
        assert_eq!(config.llm.model, "llama2");
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.timeout_seconds, 1200);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.intake.max_input_attempts, 3);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = TripAiConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_model() {
        let mut config = TripAiConfig::default();
        config.llm.model = "  ".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Model name"));
    }

    #[test]
    fn test_config_validation_bad_base_url() {
        let mut config = TripAiConfig::default();
        config.llm.base_url = "127.0.0.1:11434".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base URL"));
    }

    #[test]
    fn test_config_validation_temperature_range() {
        let mut config = TripAiConfig::default();
        config.llm.temperature = 2.5;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("temperature"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = TripAiConfig::default();
        config.llm.timeout_seconds = 7200;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[test]
    fn test_config_validation_zero_attempts() {
        let mut config = TripAiConfig::default();
        config.intake.max_input_attempts = 0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("at least one input attempt")
        );
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TripAiConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = TripAiConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tripai"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
