use serde::Serialize;

use sg_app::RecoveryOutcome;
use sg_core::gate::{GateState, ScreenId};

/// Gate state as shown to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateStateDto {
    pub screen: ScreenId,
    pub authenticated: bool,
    /// "Unable to verify account" notice; `None` when the state is verified.
    pub notice: Option<String>,
}

impl GateStateDto {
    pub fn new(state: &GateState, authenticated: bool) -> Self {
        let notice = match state {
            GateState::Unverified { reason, .. } => Some(reason.user_message().to_string()),
            _ => None,
        };
        Self {
            screen: state.screen(),
            authenticated,
            notice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryDto {
    pub dialing: bool,
    pub message: String,
}

impl From<RecoveryOutcome> for RecoveryDto {
    fn from(outcome: RecoveryOutcome) -> Self {
        match outcome {
            RecoveryOutcome::Dialing { contact_name } => Self {
                dialing: true,
                message: format!("Calling {contact_name}..."),
            },
            RecoveryOutcome::Unavailable { message } => Self {
                dialing: false,
                message,
            },
        }
    }
}
