//! MailPalette - a command palette for mail clients.
//!
//! The crate is split into a pure fuzzy [`search`] core, a [`commands`]
//! registry that ranks and runs actions, and thin host-facing layers
//! ([`palette`], [`messages`], [`host`]).
//!
//! ```
//! use mailpalette::commands::{handler_fn, Command, CommandRegistry};
//!
//! let registry = CommandRegistry::new();
//! registry
//!     .register(Command::new("open-settings", "Open Settings", handler_fn(|| async { Ok(()) })))
//!     .unwrap();
//!
//! let results = registry.search("opse");
//! assert_eq!(results[0].command.id, "open-settings");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod messages;
pub mod palette;
pub mod search;
