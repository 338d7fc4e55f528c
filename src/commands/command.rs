//! Command definitions.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

/// The action run when a command is executed.
///
/// Actions may suspend (e.g. to talk to the host) and may fail. Failures are
/// handed back to the caller of [`CommandRegistry::execute`] unchanged.
///
/// [`CommandRegistry::execute`]: super::CommandRegistry::execute
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Run the action to completion.
    async fn run(&self) -> anyhow::Result<()>;
}

/// Adapter turning an async closure into a [`CommandHandler`].
pub struct FnHandler<F>(F);

#[async_trait]
impl<F, Fut> CommandHandler for FnHandler<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    async fn run(&self) -> anyhow::Result<()> {
        (self.0)().await
    }
}

/// Wrap an async closure as a command handler.
///
/// ```
/// use mailpalette::commands::{handler_fn, Command};
///
/// let command = Command::new("noop", "Do Nothing", handler_fn(|| async { Ok(()) }));
/// assert_eq!(command.id, "noop");
/// ```
pub fn handler_fn<F, Fut>(f: F) -> FnHandler<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    FnHandler(f)
}

/// A command that can be executed from the command palette.
#[derive(Clone)]
pub struct Command {
    /// Unique identifier for the command.
    pub id: String,
    /// Display title shown in the palette.
    pub title: String,
    /// Optional description for additional context.
    pub description: Option<String>,
    /// Additional keywords for search.
    pub keywords: Vec<String>,
    /// The action to perform when executed.
    action: Arc<dyn CommandHandler>,
}

impl Command {
    /// Create a command with no description or keywords.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        action: impl CommandHandler + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            keywords: Vec::new(),
            action: Arc::new(action),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the search keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Searchable text in ranking order: title, description, then keywords.
    pub fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.keywords.len());
        fields.push(self.title.as_str());
        if let Some(desc) = &self.description {
            fields.push(desc.as_str());
        }
        fields.extend(self.keywords.iter().map(String::as_str));
        fields
    }

    /// Identify which field a [`search_fields`](Self::search_fields) index refers to.
    pub fn matched_field(&self, index: usize) -> MatchedField {
        match (index, self.description.is_some()) {
            (0, _) => MatchedField::Title,
            (1, true) => MatchedField::Description,
            (i, true) => MatchedField::Keyword(i - 2),
            (i, false) => MatchedField::Keyword(i - 1),
        }
    }

    /// Run the command's action.
    pub(crate) async fn run(&self) -> anyhow::Result<()> {
        self.action.run().await
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

/// The field of a command that produced a search hit.
///
/// Match offsets in a search result index into this field, which is not
/// necessarily the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedField {
    /// The display title.
    Title,
    /// The description.
    Description,
    /// The keyword at this position.
    Keyword(usize),
}

impl MatchedField {
    /// Get the display name for this field.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Keyword(_) => "keyword",
        }
    }
}
