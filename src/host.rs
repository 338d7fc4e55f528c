//! Host capabilities used by command actions.
//!
//! Commands never talk to the mail client directly. They receive a
//! [`Navigator`] and ask it to open things, which keeps the palette core
//! independent of any particular host runtime.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

/// Navigation and window operations provided by the host.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Open a URL in the host (a new tab, window, or the OS handler).
    async fn open_url(&self, url: &str) -> anyhow::Result<()>;

    /// Start composing a new message.
    async fn compose_new(&self) -> anyhow::Result<()>;

    /// Show the settings page.
    async fn open_settings(&self) -> anyhow::Result<()>;
}

/// A navigator backed by the operating system's default handlers.
#[derive(Debug, Clone)]
pub struct SystemNavigator {
    /// File opened by [`Navigator::open_settings`].
    settings_path: Option<PathBuf>,
}

impl SystemNavigator {
    /// Address handed to the OS when composing a new message.
    pub const COMPOSE_URL: &'static str = "mailto:";

    /// Create a navigator. `settings_path` is opened for the settings page.
    pub fn new(settings_path: Option<PathBuf>) -> Self {
        Self { settings_path }
    }

    async fn launch(target: String) -> anyhow::Result<()> {
        debug!(%target, "Opening with system handler");
        // `open` may block until the handler has been spawned.
        tokio::task::spawn_blocking(move || open::that(&target)).await??;
        Ok(())
    }
}

#[async_trait]
impl Navigator for SystemNavigator {
    async fn open_url(&self, url: &str) -> anyhow::Result<()> {
        Self::launch(url.to_string()).await
    }

    async fn compose_new(&self) -> anyhow::Result<()> {
        Self::launch(Self::COMPOSE_URL.to_string()).await
    }

    async fn open_settings(&self) -> anyhow::Result<()> {
        let path = self
            .settings_path
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No settings file available"))?;
        Self::launch(path.display().to_string()).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_settings_without_path_fails() {
        let navigator = SystemNavigator::new(None);
        let err = navigator.open_settings().await.unwrap_err();
        assert!(err.to_string().contains("No settings file"));
    }

    #[tokio::test]
    async fn test_recording_navigator() {
        let navigator = testing::RecordingNavigator::default();
        navigator.open_url("about:addressbook").await.unwrap();
        navigator.compose_new().await.unwrap();
        assert_eq!(
            navigator.calls(),
            vec!["open_url:about:addressbook", "compose_new"]
        );
    }

    #[tokio::test]
    async fn test_recording_navigator_failure() {
        let navigator = testing::RecordingNavigator::failing();
        assert!(navigator.open_settings().await.is_err());
        assert_eq!(navigator.calls(), vec!["open_settings"]);
    }
}
