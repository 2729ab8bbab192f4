use std::sync::Arc;

use tokio::sync::Mutex;
use sg_core::gate::GateState;
use sg_core::session::SessionEpoch;

/// Shared gate context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
#[derive(Clone)]
pub(crate) struct GateContext {
    state: Arc<Mutex<GateState>>,
    /// Serializes transition + state update + navigation.
    dispatch_lock: Arc<Mutex<()>>,
    /// Session epoch the current state was decided for.
    decided_for: Arc<Mutex<Option<SessionEpoch>>>,
    /// Highest evaluation ticket dispatched so far.
    latest_ticket: Arc<Mutex<u64>>,
}

impl GateContext {
    pub(crate) fn new(initial_state: GateState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
            decided_for: Arc::new(Mutex::new(None)),
            latest_ticket: Arc::new(Mutex::new(0)),
        }
    }

    /// Does NOT acquire `dispatch_lock`.
    pub(crate) async fn get_state(&self) -> GateState {
        self.state.lock().await.clone()
    }

    pub(crate) async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Only call while holding `dispatch_lock`.
    pub(crate) async fn set_state(&self, state: GateState, epoch: SessionEpoch) {
        let mut guard = self.state.lock().await;
        *guard = state;
        *self.decided_for.lock().await = Some(epoch);
    }

    /// Whether the state on display was decided for `epoch`.
    pub(crate) async fn decided_for(&self, epoch: SessionEpoch) -> bool {
        *self.decided_for.lock().await == Some(epoch)
    }

    /// Record `ticket` as the newest evaluation. Returns `false` when a newer
    /// one was already dispatched. Only call while holding `dispatch_lock`.
    pub(crate) async fn claim_ticket(&self, ticket: u64) -> bool {
        let mut latest = self.latest_ticket.lock().await;
        if ticket <= *latest {
            return false;
        }
        *latest = ticket;
        true
    }
}

impl Default for GateContext {
    fn default() -> Self {
        Self::new(GateState::Login)
    }
}
