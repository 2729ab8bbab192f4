use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;
use crate::commands::RecoveryDto;

/// "Forgot password": call the configured manager. Never fails; an
/// unavailable dialer is reported in the returned message.
pub async fn contact_manager(runtime: &AppRuntime) -> RecoveryDto {
    let span = info_span!("command.recovery.contact_manager");
    async { RecoveryDto::from(runtime.app().recovery.execute().await) }
        .instrument(span)
        .await
}
