//! Command registry error types.

use thiserror::Error;

/// Errors that can occur when registering or executing commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A command with this identifier is already registered.
    #[error("Command with id \"{0}\" already exists")]
    DuplicateIdentifier(String),

    /// No command is registered under this identifier.
    #[error("Command with id \"{0}\" not found")]
    CommandNotFound(String),

    /// The command's action failed.
    #[error("Command \"{id}\" failed: {source}")]
    ActionFailed {
        /// Identifier of the command that failed.
        id: String,
        /// The error returned by the action.
        #[source]
        source: anyhow::Error,
    },
}

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, CommandError>;

impl CommandError {
    /// The identifier of the command involved in this error.
    pub fn command_id(&self) -> &str {
        match self {
            CommandError::DuplicateIdentifier(id)
            | CommandError::CommandNotFound(id)
            | CommandError::ActionFailed { id, .. } => id,
        }
    }

    /// Take the action's own error out of an `ActionFailed`.
    pub fn into_action_error(self) -> Option<anyhow::Error> {
        match self {
            CommandError::ActionFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
