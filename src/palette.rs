//! The command palette facade used by hosts.
//!
//! A host owns one [`CommandPalette`] per lifecycle and routes its UI
//! requests through it.

use std::sync::Arc;

use tracing::info;

use crate::commands::{self, Command, CommandRegistry, SearchResult};
use crate::config::Settings;
use crate::host::Navigator;

/// Command palette over a shared registry.
#[derive(Clone)]
pub struct CommandPalette {
    registry: Arc<CommandRegistry>,
    max_results: Option<usize>,
}

impl CommandPalette {
    /// Create a palette over an existing registry.
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self {
            registry,
            max_results: None,
        }
    }

    /// Build a palette with the built-in and configured commands registered.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::DuplicateIdentifier` if a configured command
    /// reuses an existing id.
    pub fn from_settings(
        settings: &Settings,
        navigator: Arc<dyn Navigator>,
    ) -> commands::Result<Self> {
        let registry = Arc::new(CommandRegistry::new());
        commands::register_all(&registry, navigator, &settings.urls, &settings.commands)?;
        info!(commands = registry.len(), "Command palette ready");

        Ok(Self::new(registry).with_max_results(settings.max_results))
    }

    /// Limit the number of search results.
    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    /// All commands in registration order.
    pub fn get_commands(&self) -> Vec<Arc<Command>> {
        self.registry.get_all()
    }

    /// Ranked commands for `query`, honoring the result limit.
    pub fn search_commands(&self, query: &str) -> Vec<SearchResult> {
        match self.max_results {
            Some(limit) => self.registry.search_limited(query, limit),
            None => self.registry.search(query),
        }
    }

    /// Execute a command by id.
    pub async fn execute_command(&self, id: &str) -> commands::Result<()> {
        self.registry.execute(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;
    use crate::config::UserCommand;
    use crate::host::testing::RecordingNavigator;

    #[test]
    fn test_from_settings_registers_defaults() {
        let palette = CommandPalette::from_settings(
            &Settings::default(),
            Arc::new(RecordingNavigator::default()),
        )
        .unwrap();
        assert_eq!(palette.get_commands().len(), 4);
    }

    #[test]
    fn test_max_results_applies_to_search() {
        let settings = Settings {
            max_results: Some(2),
            ..Settings::default()
        };
        let palette =
            CommandPalette::from_settings(&settings, Arc::new(RecordingNavigator::default()))
                .unwrap();

        assert_eq!(palette.search_commands("").len(), 2);
        assert_eq!(palette.get_commands().len(), 4);
    }

    #[test]
    fn test_from_settings_duplicate_user_command() {
        let settings = Settings {
            commands: vec![UserCommand {
                id: "search-messages".to_string(),
                title: "Search".to_string(),
                description: None,
                keywords: Vec::new(),
                url: "https://example.com".to_string(),
            }],
            ..Settings::default()
        };
        let result =
            CommandPalette::from_settings(&settings, Arc::new(RecordingNavigator::default()));
        assert!(matches!(
            result,
            Err(CommandError::DuplicateIdentifier(ref id)) if id == "search-messages"
        ));
    }

    #[tokio::test]
    async fn test_execute_command() {
        let navigator = Arc::new(RecordingNavigator::default());
        let palette = CommandPalette::from_settings(&Settings::default(), navigator.clone())
            .unwrap();

        palette.execute_command("open-settings").await.unwrap();
        assert_eq!(navigator.calls(), vec!["open_settings"]);
        assert!(palette.execute_command("nope").await.is_err());
    }
}
