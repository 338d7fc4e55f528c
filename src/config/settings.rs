//! Application settings configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Application-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of search results to return. Unlimited when unset.
    pub max_results: Option<usize>,
    /// Host URLs used by the built-in commands.
    pub urls: UrlSettings,
    /// Extra commands that open a URL.
    pub commands: Vec<UserCommand>,
}

/// URLs opened by the built-in commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlSettings {
    /// Message search view.
    pub search: String,
    /// Address book view.
    pub address_book: String,
}

impl Default for UrlSettings {
    fn default() -> Self {
        Self {
            search: "about:3pane?folderPaneVisible=false&messagePaneVisible=false".to_string(),
            address_book: "about:addressbook".to_string(),
        }
    }
}

/// A user-defined command that opens a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCommand {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Additional search keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// URL opened when the command runs.
    pub url: String,
}

impl Settings {
    /// Parse and validate settings from TOML.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate these settings.
    ///
    /// Checks that:
    /// - `max_results` is not zero
    /// - Every user command has a non-empty id, title and URL
    /// - User command ids are unique
    ///
    /// Collisions with built-in command ids are reported at registration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` with details if validation fails.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_results must be greater than zero".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for cmd in &self.commands {
            if cmd.id.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "command id cannot be empty".to_string(),
                ));
            }
            if cmd.title.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "command '{}': title cannot be empty",
                    cmd.id
                )));
            }
            if cmd.url.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "command '{}': url cannot be empty",
                    cmd.id
                )));
            }
            if !seen.insert(cmd.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "command '{}' is defined more than once",
                    cmd.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.max_results, None);
        assert_eq!(settings.urls.address_book, "about:addressbook");
        assert!(settings.commands.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let err = Settings::from_toml("max_results = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_user_command_requires_url() {
        let err = Settings::from_toml(
            r#"
[[commands]]
id = "x"
title = "X"
url = "  "
"#,
        )
        .unwrap_err();
        match err {
            ConfigError::ValidationError(msg) => assert!(msg.contains("url")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_user_commands_rejected() {
        let err = Settings::from_toml(
            r#"
[[commands]]
id = "docs"
title = "Docs"
url = "https://example.com"

[[commands]]
id = "docs"
title = "Docs Again"
url = "https://example.org"
"#,
        )
        .unwrap_err();
        match err {
            ConfigError::ValidationError(msg) => assert!(msg.contains("more than once")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_field() {
        let err = Settings::from_toml(
            r#"
[[commands]]
id = "x"
url = "https://example.com"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
