use staffgate_lib::bootstrap::{self, ConfigSource};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let loaded = bootstrap::resolve_config(bootstrap::config_path())?;
    bootstrap::tracing::init_tracing_subscriber(&loaded.config.logging)?;

    match &loaded.source {
        ConfigSource::File(path) => info!(path = %path.display(), "configuration loaded"),
        ConfigSource::Defaults(path) => warn!(
            path = %path.display(),
            "config file not found, using defaults"
        ),
    }

    if let Err(err) = bootstrap::run_app(loaded.config).await {
        error!(error = ?err, "staffgate exited with error");
        return Err(err);
    }
    Ok(())
}
