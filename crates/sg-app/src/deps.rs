//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for [`crate::App`] construction.
//! 用于构造 [`crate::App`] 的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! **这不是 Builder 模式。**
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;

use sg_core::ports::*;

/// All dependencies are required; no defaults, no optional fields.
/// 所有依赖都是必需的，无默认值，无可选字段。
pub struct AppDeps {
    // Session dependencies / 会话依赖
    pub session_storage: Arc<dyn SessionStoragePort>,

    // Gate dependencies / 门控依赖
    pub profiles: Arc<dyn ProfileLookupPort>,
    pub navigator: Arc<dyn NavigationPort>,

    // Recovery dependencies / 找回依赖
    pub telephony: Arc<dyn TelephonyPort>,
}
