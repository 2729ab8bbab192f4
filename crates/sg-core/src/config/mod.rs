//! Application configuration DTO.
//!
//! Pure data: TOML → struct mapping only. Policy derived from these values
//! (timeouts, retries) lives next to the code that uses it, see
//! [`crate::gate::GateConfig`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::recovery::RecoveryContact;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub profile_service: ProfileServiceConfig,
    pub recovery_contact: RecoveryContact,
    pub logging: LoggingConfig,
}

/// Durable device storage for the session credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one file per stored key.
    pub data_dir: PathBuf,
    /// Key the credential token is stored under.
    pub session_key: String,
}

/// HR profile service endpoint and lookup policy inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileServiceConfig {
    pub base_url: String,
    pub lookup_timeout_ms: u64,
    pub lookup_retries: u32,
    pub retry_backoff_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file directory; stdout only when absent.
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Map a parsed TOML document onto the DTO. Missing sections and keys keep
    /// their defaults; unknown keys are ignored.
    pub fn from_toml(value: &toml::Value) -> anyhow::Result<Self> {
        let config = value.clone().try_into()?;
        Ok(config)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".staffgate"),
            session_key: "session.credential".to_string(),
        }
    }
}

impl Default for ProfileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            lookup_timeout_ms: 5_000,
            lookup_retries: 2,
            retry_backoff_ms: 250,
        }
    }
}
