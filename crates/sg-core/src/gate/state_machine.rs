//! Gate state machine.
//!
//! Defines a pure state transition function for the session/profile gate.
//! Side effects are returned as [`GateAction`]s and executed by the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::gate::{GateDecision, ScreenId};
use crate::profile::ProfileLookupFailure;

/// Gate state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateState {
    /// No credentials on this device.
    Login,
    /// Signed in, but no employee record exists yet.
    AccountNotSetup,
    /// Signed in with a provisioned profile.
    Home,
    /// Signed in, but provisioning could not be confirmed.
    ///
    /// The user stays on `screen` and is offered a retry.
    Unverified {
        screen: GateDecision,
        reason: ProfileLookupFailure,
    },
}

impl GateState {
    /// The decision whose screen is (or should be) showing.
    pub fn decision(&self) -> GateDecision {
        match self {
            Self::Login => GateDecision::Login,
            Self::AccountNotSetup => GateDecision::AccountNotSetup,
            Self::Home => GateDecision::Home,
            Self::Unverified { screen, .. } => *screen,
        }
    }

    pub fn screen(&self) -> ScreenId {
        self.decision().screen()
    }

    pub fn is_unverified(&self) -> bool {
        matches!(self, Self::Unverified { .. })
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self::Login
    }
}

impl From<GateDecision> for GateState {
    fn from(decision: GateDecision) -> Self {
        match decision {
            GateDecision::Login => Self::Login,
            GateDecision::AccountNotSetup => Self::AccountNotSetup,
            GateDecision::Home => Self::Home,
        }
    }
}

/// Events that drive the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateEvent {
    /// The session is (now) unauthenticated.
    SessionEnded,
    /// The current session was evaluated to `decision`.
    Evaluated { decision: GateDecision },
    /// Profile lookup for the current session failed.
    ///
    /// `identity_changed` is set when the screen on display was earned by an
    /// earlier session; that screen is then no fallback for this one.
    ProfileLookupFailed {
        reason: ProfileLookupFailure,
        identity_changed: bool,
    },
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateAction {
    /// Replace the current screen; never pushes history.
    Navigate(ScreenId),
}

/// Pure gate state machine.
pub struct GateStateMachine;

impl GateStateMachine {
    pub fn transition(state: GateState, event: GateEvent) -> (GateState, Vec<GateAction>) {
        match event {
            GateEvent::SessionEnded => (
                GateState::Login,
                vec![GateAction::Navigate(ScreenId::Login)],
            ),
            GateEvent::Evaluated { decision } => (
                GateState::from(decision),
                vec![GateAction::Navigate(decision.screen())],
            ),
            GateEvent::ProfileLookupFailed {
                reason,
                identity_changed: true,
            } => {
                debug!(from = ?state, ?reason, "profile lookup failed for a new session, falling back to login");
                (
                    GateState::Unverified {
                        screen: GateDecision::Login,
                        reason,
                    },
                    vec![GateAction::Navigate(ScreenId::Login)],
                )
            }
            GateEvent::ProfileLookupFailed {
                reason,
                identity_changed: false,
            } => {
                debug!(from = ?state, ?reason, "profile lookup failed, keeping current screen");
                (
                    GateState::Unverified {
                        screen: state.decision(),
                        reason,
                    },
                    Vec::new(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::EmployeeProfile;

    fn resolved(profile: EmployeeProfile) -> GateEvent {
        GateEvent::Evaluated {
            decision: GateDecision::for_profile(profile),
        }
    }

    #[test]
    fn session_ended_from_any_state_navigates_to_login() {
        let states = [
            GateState::Login,
            GateState::AccountNotSetup,
            GateState::Home,
            GateState::Unverified {
                screen: GateDecision::Home,
                reason: ProfileLookupFailure::Timeout,
            },
        ];
        for state in states {
            let (next, actions) = GateStateMachine::transition(state, GateEvent::SessionEnded);
            assert_eq!(next, GateState::Login);
            assert_eq!(actions, vec![GateAction::Navigate(ScreenId::Login)]);
        }
    }

    #[test]
    fn missing_profile_transitions_to_account_not_setup() {
        let (next, actions) = GateStateMachine::transition(
            GateState::Login,
            resolved(EmployeeProfile::missing()),
        );
        assert_eq!(next, GateState::AccountNotSetup);
        assert_eq!(
            actions,
            vec![GateAction::Navigate(ScreenId::AccountNotSetupView)]
        );
    }

    #[test]
    fn provisioning_moves_account_not_setup_home() {
        let (next, actions) = GateStateMachine::transition(
            GateState::AccountNotSetup,
            resolved(EmployeeProfile::provisioned()),
        );
        assert_eq!(next, GateState::Home);
        assert_eq!(actions, vec![GateAction::Navigate(ScreenId::HomeView)]);
    }

    #[test]
    fn lookup_failure_keeps_screen_and_never_navigates() {
        let (next, actions) = GateStateMachine::transition(
            GateState::AccountNotSetup,
            GateEvent::ProfileLookupFailed {
                reason: ProfileLookupFailure::Network,
                identity_changed: false,
            },
        );
        assert_eq!(
            next,
            GateState::Unverified {
                screen: GateDecision::AccountNotSetup,
                reason: ProfileLookupFailure::Network,
            }
        );
        assert!(actions.is_empty());
        assert_eq!(next.screen(), ScreenId::AccountNotSetupView);
    }

    #[test]
    fn repeated_failures_keep_the_original_screen() {
        let state = GateState::Unverified {
            screen: GateDecision::Home,
            reason: ProfileLookupFailure::Timeout,
        };
        let (next, _) = GateStateMachine::transition(
            state,
            GateEvent::ProfileLookupFailed {
                reason: ProfileLookupFailure::Server { status: 503 },
                identity_changed: false,
            },
        );
        assert_eq!(next.decision(), GateDecision::Home);
        assert!(next.is_unverified());
    }

    #[test]
    fn lookup_failure_for_new_identity_never_keeps_home() {
        for state in [GateState::Home, GateState::AccountNotSetup] {
            let (next, actions) = GateStateMachine::transition(
                state,
                GateEvent::ProfileLookupFailed {
                    reason: ProfileLookupFailure::Network,
                    identity_changed: true,
                },
            );
            assert_eq!(
                next,
                GateState::Unverified {
                    screen: GateDecision::Login,
                    reason: ProfileLookupFailure::Network,
                }
            );
            assert_eq!(actions, vec![GateAction::Navigate(ScreenId::Login)]);
        }
    }
}
