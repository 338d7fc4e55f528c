//! Built-in mail commands and user-defined URL commands.

use std::sync::Arc;

use super::command::{handler_fn, Command};
use super::error::Result;
use super::registry::CommandRegistry;
use crate::config::{UrlSettings, UserCommand};
use crate::host::Navigator;

/// Build the default mail client commands.
pub fn default_commands(navigator: Arc<dyn Navigator>, urls: &UrlSettings) -> Vec<Command> {
    let compose = Arc::clone(&navigator);
    let search = Arc::clone(&navigator);
    let search_url = urls.search.clone();
    let address_book = Arc::clone(&navigator);
    let address_book_url = urls.address_book.clone();
    let settings = navigator;

    vec![
        Command::new(
            "compose-new-message",
            "Compose New Message",
            handler_fn(move || {
                let navigator = Arc::clone(&compose);
                async move { navigator.compose_new().await }
            }),
        )
        .with_description("Open a new message composer")
        .with_keywords(["write", "email", "mail"]),
        Command::new(
            "search-messages",
            "Search Messages",
            handler_fn(move || {
                let navigator = Arc::clone(&search);
                let url = search_url.clone();
                async move { navigator.open_url(&url).await }
            }),
        )
        .with_description("Search through your messages")
        .with_keywords(["find", "inbox"]),
        Command::new(
            "open-address-book",
            "Open Address Book",
            handler_fn(move || {
                let navigator = Arc::clone(&address_book);
                let url = address_book_url.clone();
                async move { navigator.open_url(&url).await }
            }),
        )
        .with_description("Open the address book")
        .with_keywords(["contacts", "people"]),
        Command::new(
            "open-settings",
            "Open Settings",
            handler_fn(move || {
                let navigator = Arc::clone(&settings);
                async move { navigator.open_settings().await }
            }),
        )
        .with_description("Open the palette settings")
        .with_keywords(["preferences", "options", "config"]),
    ]
}

/// Build a command that opens the configured URL.
pub fn user_command(navigator: Arc<dyn Navigator>, def: &UserCommand) -> Command {
    let url = def.url.clone();
    let mut command = Command::new(
        def.id.clone(),
        def.title.clone(),
        handler_fn(move || {
            let navigator = Arc::clone(&navigator);
            let url = url.clone();
            async move { navigator.open_url(&url).await }
        }),
    )
    .with_keywords(def.keywords.iter().cloned());

    if let Some(desc) = &def.description {
        command = command.with_description(desc.clone());
    }
    command
}

/// Register the built-in commands followed by the user-defined ones.
///
/// # Errors
///
/// Returns `CommandError::DuplicateIdentifier` on the first id collision.
/// Commands registered before the collision stay registered.
pub fn register_all(
    registry: &CommandRegistry,
    navigator: Arc<dyn Navigator>,
    urls: &UrlSettings,
    user_commands: &[UserCommand],
) -> Result<()> {
    for command in default_commands(Arc::clone(&navigator), urls) {
        registry.register(command)?;
    }
    for def in user_commands {
        registry.register(user_command(Arc::clone(&navigator), def))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;
    use crate::host::testing::RecordingNavigator;

    fn setup(user_commands: &[UserCommand]) -> (CommandRegistry, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let registry = CommandRegistry::new();
        register_all(
            &registry,
            navigator.clone(),
            &UrlSettings::default(),
            user_commands,
        )
        .unwrap();
        (registry, navigator)
    }

    fn calendar() -> UserCommand {
        UserCommand {
            id: "open-calendar".to_string(),
            title: "Open Calendar".to_string(),
            description: Some("Show the calendar tab".to_string()),
            keywords: vec!["events".to_string()],
            url: "about:calendar".to_string(),
        }
    }

    #[test]
    fn test_default_command_ids() {
        let (registry, _) = setup(&[]);
        let ids: Vec<String> = registry.get_all().iter().map(|c| c.id.clone()).collect();
        assert_eq!(
            ids,
            vec![
                "compose-new-message",
                "search-messages",
                "open-address-book",
                "open-settings"
            ]
        );
    }

    #[tokio::test]
    async fn test_default_commands_dispatch_to_navigator() {
        let (registry, navigator) = setup(&[]);

        registry.execute("compose-new-message").await.unwrap();
        registry.execute("open-address-book").await.unwrap();
        registry.execute("search-messages").await.unwrap();
        registry.execute("open-settings").await.unwrap();

        let urls = UrlSettings::default();
        assert_eq!(
            navigator.calls(),
            vec![
                "compose_new".to_string(),
                format!("open_url:{}", urls.address_book),
                format!("open_url:{}", urls.search),
                "open_settings".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_user_command_opens_url() {
        let (registry, navigator) = setup(&[calendar()]);

        assert_eq!(registry.len(), 5);
        let results = registry.search("events");
        assert_eq!(results[0].command.id, "open-calendar");

        registry.execute("open-calendar").await.unwrap();
        assert_eq!(navigator.calls(), vec!["open_url:about:calendar"]);
    }

    #[test]
    fn test_user_command_colliding_with_default() {
        let mut clash = calendar();
        clash.id = "open-settings".to_string();

        let registry = CommandRegistry::new();
        let err = register_all(
            &registry,
            Arc::new(RecordingNavigator::default()),
            &UrlSettings::default(),
            &[clash],
        )
        .unwrap_err();

        assert!(matches!(err, CommandError::DuplicateIdentifier(_)));
        assert_eq!(registry.get("open-settings").unwrap().title, "Open Settings");
    }

    #[tokio::test]
    async fn test_navigator_failure_surfaces() {
        let registry = CommandRegistry::new();
        register_all(
            &registry,
            Arc::new(RecordingNavigator::failing()),
            &UrlSettings::default(),
            &[],
        )
        .unwrap();

        let err = registry.execute("compose-new-message").await.unwrap_err();
        assert!(matches!(err, CommandError::ActionFailed { .. }));
        assert_eq!(
            err.into_action_error().unwrap().to_string(),
            "navigator offline"
        );
    }

    #[test]
    fn test_search_finds_defaults_by_keyword() {
        let (registry, _) = setup(&[]);
        let results = registry.search("contacts");
        assert_eq!(results[0].command.id, "open-address-book");
    }
}
