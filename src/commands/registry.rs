//! Command registry for the command palette.
//!
//! Provides command registration, fuzzy search and execution.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, instrument, warn};

use super::command::{Command, MatchedField};
use super::error::{CommandError, Result};
use crate::search;

/// A command ranked against a search query.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The matched command.
    pub command: Arc<Command>,
    /// Relevance score (higher is better, 0 for an empty query).
    pub score: i32,
    /// Character offsets into the matched field.
    pub matches: Vec<usize>,
    /// Which field of the command the offsets refer to.
    pub field: MatchedField,
}

fn position(commands: &[Arc<Command>], id: &str) -> Option<usize> {
    commands.iter().position(|cmd| cmd.id == id)
}

/// Registry of commands with search.
///
/// The registry can be shared between threads. Commands sit behind a single
/// mutex that is only held while the list is read or modified, never while
/// an action runs.
#[derive(Default)]
pub struct CommandRegistry {
    /// All registered commands, in registration order.
    commands: Mutex<Vec<Arc<Command>>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<Command>>> {
        // Nothing panics while holding the lock, but don't lose the registry if it did.
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a command.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::DuplicateIdentifier` if a command with the same
    /// ID is already registered. The registry is left unchanged.
    pub fn register(&self, command: Command) -> Result<()> {
        let mut commands = self.lock();
        if position(&commands, &command.id).is_some() {
            warn!(id = %command.id, "Rejected duplicate command");
            return Err(CommandError::DuplicateIdentifier(command.id));
        }
        debug!(id = %command.id, title = %command.title, "Registered command");
        commands.push(Arc::new(command));
        Ok(())
    }

    /// Remove a command. Returns whether it was registered.
    pub fn unregister(&self, id: &str) -> bool {
        let mut commands = self.lock();
        match position(&commands, id) {
            Some(pos) => {
                commands.remove(pos);
                debug!(id, "Unregistered command");
                true
            }
            None => false,
        }
    }

    /// Look up a command by ID.
    pub fn get(&self, id: &str) -> Option<Arc<Command>> {
        let commands = self.lock();
        position(&commands, id).map(|pos| Arc::clone(&commands[pos]))
    }

    /// Check whether a command is registered.
    pub fn contains(&self, id: &str) -> bool {
        position(&self.lock(), id).is_some()
    }

    /// Get all registered commands in registration order.
    pub fn get_all(&self) -> Vec<Arc<Command>> {
        self.lock().clone()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Search for commands matching the query.
    ///
    /// Each command is scored on its title, description and keywords, in that
    /// order, keeping the best field. Results are sorted by score (highest
    /// first); commands with equal scores stay in registration order. An
    /// empty query returns every command unranked.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let commands = self.get_all();
        let results: Vec<SearchResult> =
            search::search(query, &commands, |cmd| cmd.search_fields())
                .into_iter()
                .map(|hit| SearchResult {
                    command: Arc::clone(hit.item),
                    score: hit.score,
                    matches: hit.matches,
                    field: hit.item.matched_field(hit.field),
                })
                .collect();

        debug!(query, results = results.len(), "Searched commands");
        results
    }

    /// Like [`search`](Self::search), keeping at most `limit` results.
    pub fn search_limited(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let mut results = self.search(query);
        results.truncate(limit);
        results
    }

    /// Execute a command by ID.
    ///
    /// The action's failure is returned as `CommandError::ActionFailed` and
    /// never retried.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::CommandNotFound` if no command has this ID.
    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str) -> Result<()> {
        let command = self.get(id).ok_or_else(|| {
            warn!("Command not found");
            CommandError::CommandNotFound(id.to_string())
        })?;

        info!(title = %command.title, "Executing command");
        command.run().await.map_err(|source| {
            warn!(error = %source, "Command failed");
            CommandError::ActionFailed {
                id: id.to_string(),
                source,
            }
        })
    }
}
