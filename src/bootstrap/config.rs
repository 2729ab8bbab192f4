//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file and maps it onto [`AppConfig`].
//! 读取 TOML 文件并映射为 [`AppConfig`]。
//!
//! Pure data loading: no validation and no policy. Values the DTO cannot
//! express sensibly (a zero timeout, say) are normalized where they are used.
//! 仅纯数据加载，不做验证，不含策略。

use std::path::{Path, PathBuf};

use anyhow::Context;
use sg_core::AppConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "STAFFGATE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "staffgate.toml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at this path; built-in defaults are in effect.
    Defaults(PathBuf),
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

/// Load configuration from a TOML file.
/// 从 TOML 文件加载配置。
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read, is not valid TOML, or has
/// values of the wrong type.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config in {}", config_path.display()))
}

/// Config path from `STAFFGATE_CONFIG`, or `staffgate.toml` in the working
/// directory.
pub fn config_path() -> PathBuf {
    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// Load the config at `path`, falling back to defaults when the file does
/// not exist. A file that exists but cannot be parsed is still an error.
pub fn resolve_config(path: PathBuf) -> anyhow::Result<LoadedConfig> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: AppConfig::default(),
            source: ConfigSource::Defaults(path),
        });
    }
    let config = load_config(&path)?;
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [storage]
            data_dir = "/var/lib/staffgate"

            [profile_service]
            base_url = "https://hr.example.com/api"
            lookup_timeout_ms = 3000

            [recovery_contact]
            name = "Store Manager"
            phone_number = "+1 555 0100"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/staffgate"));
        assert_eq!(config.profile_service.base_url, "https://hr.example.com/api");
        assert_eq!(config.profile_service.lookup_timeout_ms, 3000);
        assert_eq!(config.recovery_contact.name, "Store Manager");
        assert_eq!(config.recovery_contact.phone_number.as_str(), "+1 555 0100");
    }

    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[storage\ndata_dir = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_returns_error_when_file_unreadable() {
        let err = load_config(Path::new("/nonexistent/staffgate.toml")).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_config_falls_back_to_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staffgate.toml");

        let loaded = resolve_config(path.clone()).unwrap();

        assert_eq!(loaded.config, AppConfig::default());
        assert_eq!(loaded.source, ConfigSource::Defaults(path));
    }

    #[test]
    fn test_resolve_config_propagates_parse_errors() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[profile_service]\nlookup_retries = \"many\"\n")
            .unwrap();

        assert!(resolve_config(temp_file.path().to_path_buf()).is_err());
    }

    #[test]
    #[serial]
    fn test_config_path_honors_env() {
        std::env::set_var(CONFIG_ENV, "/etc/staffgate/custom.toml");
        assert_eq!(config_path(), PathBuf::from("/etc/staffgate/custom.toml"));

        std::env::set_var(CONFIG_ENV, "  ");
        assert_eq!(config_path(), PathBuf::from(DEFAULT_CONFIG_FILE));

        std::env::remove_var(CONFIG_ENV);
        assert_eq!(config_path(), PathBuf::from(DEFAULT_CONFIG_FILE));
    }
}
