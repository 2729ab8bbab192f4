use std::sync::Arc;

use sg_app::App;
use sg_core::AppConfig;
use sg_platform::HistoryNavigator;

use super::wiring::{wire_dependencies, WiringResult};

/// Everything the host needs after startup: the assembled use cases and
/// the navigation host whose screen it renders.
pub struct AppRuntime {
    app: App,
    navigator: Arc<HistoryNavigator>,
}

impl AppRuntime {
    pub fn new(app: App, navigator: Arc<HistoryNavigator>) -> Self {
        Self { app, navigator }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn navigator(&self) -> &HistoryNavigator {
        &self.navigator
    }
}

/// Wire adapters and restore the persisted session. Does not navigate.
pub async fn create_runtime(config: &AppConfig) -> WiringResult<AppRuntime> {
    let wired = wire_dependencies(config)?;
    let app = App::new(wired.deps, config).await;
    Ok(AppRuntime::new(app, wired.navigator))
}
