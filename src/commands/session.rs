//! Session commands: sign in, sign out, re-evaluate, read the gate.
//! 会话相关命令：登录、登出、重新评估、读取门控状态。

use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;
use crate::commands::{map_err, GateStateDto};

async fn snapshot(runtime: &AppRuntime, state: &sg_core::gate::GateState) -> GateStateDto {
    let authenticated = runtime
        .app()
        .authority
        .current_session()
        .await
        .is_authenticated();
    GateStateDto::new(state, authenticated)
}

/// Sign in with a token from the identity provider, then route.
/// 使用身份提供方的令牌登录，然后路由。
pub async fn sign_in(runtime: &AppRuntime, token: String) -> Result<GateStateDto, String> {
    let span = info_span!("command.session.sign_in");
    async {
        let state = runtime.app().gate.sign_in(token).await.map_err(map_err)?;
        Ok(snapshot(runtime, &state).await)
    }
    .instrument(span)
    .await
}

/// Sign out. Always succeeds; storage failures are only logged.
/// 登出。总是成功，存储失败只记录日志。
pub async fn sign_out(runtime: &AppRuntime) -> GateStateDto {
    let span = info_span!("command.session.sign_out");
    async {
        let state = runtime.app().gate.sign_out().await;
        snapshot(runtime, &state).await
    }
    .instrument(span)
    .await
}

/// Re-evaluate the current session, e.g. when the app returns to the
/// foreground or the user taps "retry".
pub async fn refresh(runtime: &AppRuntime) -> Result<GateStateDto, String> {
    let span = info_span!("command.session.refresh");
    async {
        let state = runtime.app().gate.refresh().await.map_err(map_err)?;
        Ok(snapshot(runtime, &state).await)
    }
    .instrument(span)
    .await
}

/// Current gate state without touching the network.
pub async fn current_screen(runtime: &AppRuntime) -> GateStateDto {
    let state = runtime.app().gate.state().await;
    snapshot(runtime, &state).await
}
