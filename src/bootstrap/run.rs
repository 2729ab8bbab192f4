use anyhow::Context;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{info, warn};

use sg_core::AppConfig;

use super::runtime::create_runtime;
use crate::host;

/// Start the gate and serve host commands from stdin until EOF or `quit`.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let runtime = create_runtime(&config)
        .await
        .context("Failed to assemble application")?;

    match runtime.app().gate.start().await {
        Ok(state) => info!(screen = %state.screen(), "gate started"),
        Err(err) => warn!(error = %err, "initial navigation failed; waiting for host commands"),
    }

    host::serve(&runtime, BufReader::new(stdin()), stdout()).await?;
    info!("host loop finished");
    Ok(())
}
