//! Error types and handling for the `TripAI` application

use thiserror::Error;

/// Main error type for the `TripAI` application
#[derive(Error, Debug)]
pub enum TripAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Interactive intake errors (exhausted attempts, closed input stream)
    #[error("Input error: {message}")]
    Input { message: String },

    /// Language-model endpoint errors
    #[error("LLM error: {message}")]
    Llm { message: String },

    /// Agent task execution errors
    #[error("Agent error: {message}")]
    Agent { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new intake error
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Create a new LLM endpoint error
    pub fn llm<S: Into<String>>(message: S) -> Self {
        Self::Llm {
            message: message.into(),
        }
    }

    /// Create a new agent execution error
    pub fn agent<S: Into<String>>(message: S) -> Self {
        Self::Agent {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripAiError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            TripAiError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripAiError::Input { message } => message.clone(),
            TripAiError::Llm { .. } => {
                "Unable to reach the local language model. Please check that Ollama is running."
                    .to_string()
            }
            TripAiError::Agent { message } => message.clone(),
            TripAiError::Io { .. } => {
                "Input/output operation failed.".to_string()
            }
        }
    }
}
