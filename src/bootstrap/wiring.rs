//! # Dependency Injection / 依赖注入模块
//!
//! Creates the infra and platform adapters and groups them into [`AppDeps`].
//! 创建 infra 和 platform 层实现，并打包为 [`AppDeps`]。
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! - Do not decide what the gate does with a session
//! - 不判断门控如何处理会话
//!
//! > **This is the only place allowed to depend on sg-infra + sg-platform + sg-app simultaneously.**
//! > **这是唯一允许同时依赖 sg-infra、sg-platform 和 sg-app 的地方。**

use std::sync::Arc;

use sg_app::AppDeps;
use sg_core::AppConfig;
use sg_infra::{FileSessionStorage, HttpProfileLookup};
use sg_platform::{HistoryNavigator, SystemDialer};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Profile service client initialization failed: {0}")]
    ProfileClientInit(String),
}

/// Wired dependencies plus the concrete handles the host reads from.
pub struct WiredDependencies {
    pub deps: AppDeps,
    pub navigator: Arc<HistoryNavigator>,
}

/// Build all adapters from configuration.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<WiredDependencies> {
    let session_storage = Arc::new(FileSessionStorage::new(config.storage.data_dir.clone()));
    let profiles = Arc::new(
        HttpProfileLookup::new(&config.profile_service.base_url)
            .map_err(|e| WiringError::ProfileClientInit(e.to_string()))?,
    );
    let navigator = Arc::new(HistoryNavigator::new());
    let telephony = Arc::new(SystemDialer::new());

    tracing::debug!(
        data_dir = %config.storage.data_dir.display(),
        profile_endpoint = profiles.endpoint(),
        "dependencies wired"
    );

    Ok(WiredDependencies {
        deps: AppDeps {
            session_storage,
            profiles,
            navigator: navigator.clone(),
            telephony,
        },
        navigator,
    })
}
