use std::time::Duration;

use crate::config::AppConfig;

const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_LOOKUP_RETRIES: u32 = 2;
const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Profile lookup policy used by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    /// Upper bound for a single lookup attempt.
    pub lookup_timeout: Duration,
    /// Additional attempts after a transient failure.
    pub lookup_retries: u32,
    /// Pause between attempts.
    pub retry_backoff: Duration,
}

impl GateConfig {
    /// Build the policy from the raw configuration DTO.
    ///
    /// A zero timeout would turn every lookup into a failure, so it falls back
    /// to the default instead.
    pub fn from_app_config(config: &AppConfig) -> Self {
        let service = &config.profile_service;
        let lookup_timeout = if service.lookup_timeout_ms == 0 {
            DEFAULT_LOOKUP_TIMEOUT
        } else {
            Duration::from_millis(service.lookup_timeout_ms)
        };

        Self {
            lookup_timeout,
            lookup_retries: service.lookup_retries,
            retry_backoff: Duration::from_millis(service.retry_backoff_ms),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            lookup_retries: DEFAULT_LOOKUP_RETRIES,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }
}
