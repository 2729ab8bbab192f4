use anyhow::Result;

use crate::gate::ScreenId;

/// Navigation host.
#[async_trait::async_trait]
pub trait NavigationPort: Send + Sync {
    /// Replace the current screen with `screen`. Must not push history, so
    /// "back" can never return to a stale gated screen.
    async fn replace(&self, screen: ScreenId) -> Result<()>;
}
