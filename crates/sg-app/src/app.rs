use std::sync::Arc;

use tracing::info;

use sg_core::gate::GateConfig;
use sg_core::AppConfig;

use crate::deps::AppDeps;
use crate::usecases::{GatePolicy, InitiateRecoveryContact, SessionAuthority, SessionGate};

/// The application runtime: one session authority, one gate.
/// 应用运行时：一个会话权威，一个门控。
pub struct App {
    pub authority: Arc<SessionAuthority>,
    pub gate: Arc<SessionGate>,
    pub recovery: Arc<InitiateRecoveryContact>,
}

impl App {
    /// Restore the persisted session and assemble the use cases.
    ///
    /// Does not navigate; call [`SessionGate::start`] once the host is ready.
    pub async fn new(deps: AppDeps, config: &AppConfig) -> Self {
        let AppDeps {
            session_storage,
            profiles,
            navigator,
            telephony,
        } = deps;

        let authority = Arc::new(
            SessionAuthority::restore(session_storage, config.storage.session_key.clone()).await,
        );
        let gate_config = GateConfig::from_app_config(config);
        info!(
            lookup_timeout_ms = gate_config.lookup_timeout.as_millis() as u64,
            lookup_retries = gate_config.lookup_retries,
            "gate policy configured"
        );
        let policy = Arc::new(GatePolicy::new(profiles, navigator, gate_config));
        let gate = Arc::new(SessionGate::new(authority.clone(), policy));
        let recovery = Arc::new(InitiateRecoveryContact::new(
            telephony,
            config.recovery_contact.clone(),
        ));

        Self {
            authority,
            gate,
            recovery,
        }
    }
}
