//! Command system for the command palette.
//!
//! This module provides:
//! - Command definitions with async actions
//! - Command registry with fuzzy search and execution
//! - Recent commands tracking
//! - The built-in mail commands

mod command;
mod defaults;
mod error;
mod registry;

pub use command::{handler_fn, Command, CommandHandler, FnHandler, MatchedField};
pub use defaults::{default_commands, register_all, user_command};
pub use error::{CommandError, Result};
pub use registry::{CommandRegistry, SearchResult};
