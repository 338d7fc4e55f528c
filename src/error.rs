//! Centralized error types for MailPalette.
//!
//! This module provides a unified error hierarchy for the application with
//! user-friendly error messages. All error types use `thiserror` for
//! ergonomic error handling.

use thiserror::Error;

use crate::commands::CommandError;
use crate::config::ConfigError;

/// The main application error type.
///
/// This enum aggregates all error types that can occur in MailPalette,
/// providing user-friendly error messages while preserving the underlying
/// error context for debugging.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Command registration or execution errors.
    #[error("{0}")]
    Command(#[from] CommandError),

    /// IO errors (stdin/stdout, file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display.
    ///
    /// This returns a message suitable for showing to users, without
    /// technical jargon or error chains.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Command(e) => match e {
                CommandError::DuplicateIdentifier(id) => {
                    format!("A command named '{}' is already registered.", id)
                }
                CommandError::CommandNotFound(id) => format!("Command '{}' was not found.", id),
                CommandError::ActionFailed { id, source } => {
                    format!("Command '{}' failed: {}", id, source)
                }
            },
            AppError::Io(e) => format!("IO error: {}", e),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Check if this error is recoverable.
    ///
    /// Recoverable errors affect a single request; the palette keeps working.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Command(CommandError::CommandNotFound(_))
                | AppError::Command(CommandError::ActionFailed { .. })
        )
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_))
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Fix the configuration file or set MAILPALETTE_CONFIG to another file.")
            }
            AppError::Command(CommandError::DuplicateIdentifier(_)) => {
                Some("Give each [[commands]] entry a unique id.")
            }
            AppError::Command(CommandError::CommandNotFound(_)) => {
                Some("Run 'mailpalette list' to see available commands.")
            }
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
