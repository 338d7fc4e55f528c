//! Request/response messages exchanged with a palette UI.
//!
//! Messages are JSON objects tagged by `type`:
//!
//! ```json
//! {"type": "getCommands"}
//! {"type": "searchCommands", "query": "open"}
//! {"type": "executeCommand", "commandId": "open-settings"}
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::commands::{Command, MatchedField, SearchResult};
use crate::palette::CommandPalette;

/// A request from the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Request {
    /// List every command.
    GetCommands,
    /// Rank commands against a query.
    SearchCommands {
        /// The text typed by the user.
        #[serde(default)]
        query: String,
    },
    /// Run a command.
    #[serde(rename_all = "camelCase")]
    ExecuteCommand {
        /// Id of the command to run.
        command_id: String,
    },
}

/// A response to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Response {
    /// Every registered command.
    Commands { commands: Vec<CommandSummary> },
    /// Ranked search results.
    SearchResults { results: Vec<SearchResultView> },
    /// Outcome of an execute request.
    Executed {
        success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// The request could not be understood.
    Error { message: String },
}

/// The displayable part of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSummary {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Command> for CommandSummary {
    fn from(cmd: &Command) -> Self {
        Self {
            id: cmd.id.clone(),
            title: cmd.title.clone(),
            description: cmd.description.clone(),
        }
    }
}

/// A search result as sent to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultView {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub score: i32,
    /// Character offsets into the field named by `field`.
    pub matches: Vec<usize>,
    /// `title`, `description`, or `keyword:<index>`.
    pub field: String,
}

impl From<&SearchResult> for SearchResultView {
    fn from(result: &SearchResult) -> Self {
        let cmd = &result.command;
        Self {
            id: cmd.id.clone(),
            title: cmd.title.clone(),
            description: cmd.description.clone(),
            score: result.score,
            matches: result.matches.clone(),
            field: field_name(result.field),
        }
    }
}

fn field_name(field: MatchedField) -> String {
    match field {
        MatchedField::Keyword(i) => format!("{}:{}", field.display(), i),
        _ => field.display().to_string(),
    }
}

/// Answer a request.
///
/// Execution failures are reported in the response; they never abort the
/// caller's message loop.
pub async fn handle(palette: &CommandPalette, request: Request) -> Response {
    debug!(?request, "Handling request");
    match request {
        Request::GetCommands => Response::Commands {
            commands: palette
                .get_commands()
                .iter()
                .map(|cmd| CommandSummary::from(&**cmd))
                .collect(),
        },
        Request::SearchCommands { query } => Response::SearchResults {
            results: palette
                .search_commands(&query)
                .iter()
                .map(SearchResultView::from)
                .collect(),
        },
        Request::ExecuteCommand { command_id } => {
            match palette.execute_command(&command_id).await {
                Ok(()) => Response::Executed {
                    success: true,
                    error: None,
                },
                Err(e) => Response::Executed {
                    success: false,
                    error: Some(e.to_string()),
                },
            }
        }
    }
}

/// Answer a JSON-encoded request with a JSON-encoded response.
pub async fn handle_json(palette: &CommandPalette, line: &str) -> String {
    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => handle(palette, request).await,
        Err(e) => {
            warn!(error = %e, "Malformed request");
            Response::Error {
                message: format!("Invalid request: {}", e),
            }
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"type":"error","message":"Failed to encode response: {}"}}"#, e)
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::config::Settings;
    use crate::host::testing::RecordingNavigator;

    fn palette() -> (CommandPalette, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let palette =
            CommandPalette::from_settings(&Settings::default(), navigator.clone()).unwrap();
        (palette, navigator)
    }

    #[test]
    fn test_request_wire_format() {
        let request: Request =
            serde_json::from_value(json!({"type": "executeCommand", "commandId": "x"})).unwrap();
        assert_eq!(
            request,
            Request::ExecuteCommand {
                command_id: "x".to_string()
            }
        );

        let request: Request = serde_json::from_value(json!({"type": "getCommands"})).unwrap();
        assert_eq!(request, Request::GetCommands);

        let request: Request =
            serde_json::from_value(json!({"type": "searchCommands"})).unwrap();
        assert_eq!(
            request,
            Request::SearchCommands {
                query: String::new()
            }
        );
    }

    #[tokio::test]
    async fn test_get_commands() {
        let (palette, _) = palette();
        let response = handle(&palette, Request::GetCommands).await;

        let Response::Commands { commands } = response else {
            panic!("Expected Commands response");
        };
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0].id, "compose-new-message");
        assert_eq!(
            commands[0].description.as_deref(),
            Some("Open a new message composer")
        );
    }

    #[tokio::test]
    async fn test_search_commands_json() {
        let (palette, _) = palette();
        let out = handle_json(&palette, r#"{"type":"searchCommands","query":"cnm"}"#).await;
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["type"], "searchResults");
        assert_eq!(value["results"][0]["id"], "compose-new-message");
        assert_eq!(value["results"][0]["field"], "title");
        assert_eq!(value["results"][0]["matches"], json!([0, 8, 12]));
    }

    #[tokio::test]
    async fn test_search_reports_keyword_field() {
        let (palette, _) = palette();
        let response = handle(
            &palette,
            Request::SearchCommands {
                query: "preferences".to_string(),
            },
        )
        .await;

        let Response::SearchResults { results } = response else {
            panic!("Expected SearchResults response");
        };
        assert_eq!(results[0].id, "open-settings");
        assert_eq!(results[0].field, "keyword:0");
    }

    #[tokio::test]
    async fn test_execute_success_and_failure() {
        let (palette, navigator) = palette();

        let out = handle_json(
            &palette,
            r#"{"type":"executeCommand","commandId":"compose-new-message"}"#,
        )
        .await;
        assert_eq!(out, r#"{"type":"executed","success":true}"#);
        assert_eq!(navigator.calls(), vec!["compose_new"]);

        let out = handle_json(&palette, r#"{"type":"executeCommand","commandId":"gone"}"#).await;
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Command with id \"gone\" not found");
    }

    #[tokio::test]
    async fn test_malformed_request() {
        let (palette, _) = palette();
        let out = handle_json(&palette, r#"{"type":"launchRockets"}"#).await;
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["type"], "error");
        assert!(value["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request"));
    }
}
