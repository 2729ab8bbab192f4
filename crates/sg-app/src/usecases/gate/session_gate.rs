//! Session gate orchestrator.
//!
//! Coordinates the session authority, the gate policy and the gate state
//! machine. Session changes come in through `sign_in`/`sign_out`/`refresh`,
//! navigation goes out through the policy.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info, info_span, Instrument};

use sg_core::gate::{GateAction, GateDecision, GateEvent, GateState, GateStateMachine};
use sg_core::session::SessionEpoch;

use super::context::GateContext;
use super::{GateError, GatePolicy};
use crate::usecases::session::SessionAuthority;

pub struct SessionGate {
    authority: Arc<SessionAuthority>,
    policy: Arc<GatePolicy>,
    context: GateContext,
    /// Issues one ticket per evaluation so an older result cannot land after
    /// a newer one within the same session.
    evaluations: AtomicU64,
}

impl SessionGate {
    pub fn new(authority: Arc<SessionAuthority>, policy: Arc<GatePolicy>) -> Self {
        Self {
            authority,
            policy,
            context: GateContext::default(),
            evaluations: AtomicU64::new(0),
        }
    }

    /// Evaluate the restored session and put its screen up.
    ///
    /// If provisioning cannot be verified the Login screen stays up with the
    /// gate in [`GateState::Unverified`].
    pub async fn start(&self) -> Result<GateState, GateError> {
        let state = self.refresh().await?;
        self.policy.apply(state.decision()).await?;
        Ok(state)
    }

    /// Sign in and re-evaluate. Persist failures are returned and leave the
    /// gate untouched.
    pub async fn sign_in(&self, raw_token: impl Into<String>) -> Result<GateState, GateError> {
        self.authority.sign_in(raw_token).await?;
        self.refresh().await
    }

    /// Sign out and navigate to Login. Always succeeds.
    pub async fn sign_out(&self) -> GateState {
        let session = self.authority.sign_out().await;

        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        match self
            .dispatch_locked(GateEvent::SessionEnded, session.epoch())
            .await
        {
            Ok(state) => state,
            Err(err) => {
                error!(error = %err, "navigation to login failed after sign-out");
                self.context.get_state().await
            }
        }
    }

    /// Re-evaluate the current session, e.g. on app foreground.
    ///
    /// The profile lookup runs without holding the dispatch lock. Its result
    /// is dropped if the session changed while it was in flight, or if a
    /// later evaluation already landed.
    pub async fn refresh(&self) -> Result<GateState, GateError> {
        let ticket = self.evaluations.fetch_add(1, Ordering::SeqCst) + 1;
        let session = self.authority.current_session().await;
        let outcome = self.policy.evaluate(&session).await;

        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let current_epoch = self.authority.epoch().await;
        if current_epoch != session.epoch() {
            debug!(
                started = session.epoch().value(),
                current = current_epoch.value(),
                "discarding stale gate evaluation"
            );
            return Ok(self.context.get_state().await);
        }
        if !self.context.claim_ticket(ticket).await {
            debug!(ticket, "discarding superseded gate evaluation");
            return Ok(self.context.get_state().await);
        }

        let event = match outcome {
            Ok(GateDecision::Login) => GateEvent::SessionEnded,
            Ok(decision) => GateEvent::Evaluated { decision },
            Err(reason) => GateEvent::ProfileLookupFailed {
                reason,
                identity_changed: !self.context.decided_for(current_epoch).await,
            },
        };
        self.dispatch_locked(event, current_epoch).await
    }

    pub async fn state(&self) -> GateState {
        self.context.get_state().await
    }

    /// Caller must hold the dispatch lock.
    async fn dispatch_locked(
        &self,
        event: GateEvent,
        epoch: SessionEpoch,
    ) -> Result<GateState, GateError> {
        let span = info_span!("usecase.session_gate.dispatch", event = ?event, epoch = epoch.value());
        async {
            let from = self.context.get_state().await;
            let (next, actions) = GateStateMachine::transition(from.clone(), event);
            info!(from = ?from, to = ?next, "gate state transition");

            // State first: a failed navigation is retried by the next apply,
            // the decision itself stands.
            self.context.set_state(next.clone(), epoch).await;
            self.execute_actions(actions).await?;
            Ok(next)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<GateAction>) -> Result<(), GateError> {
        for action in actions {
            debug!(?action, "gate executing action");
            match action {
                GateAction::Navigate(screen) => {
                    self.policy.navigate(screen).await?;
                }
            }
        }
        Ok(())
    }
}
