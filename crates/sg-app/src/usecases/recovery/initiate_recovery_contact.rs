use std::sync::Arc;

use tracing::{info, warn};

use sg_core::ports::{TelephonyError, TelephonyPort};
use sg_core::recovery::RecoveryContact;

/// What the forgot-password screen should tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// The telephony handler accepted the number.
    Dialing { contact_name: String },
    /// The call could not be started; `message` is shown to the user.
    Unavailable { message: String },
}

/// Use case for the forgot-password path: call the configured manager.
///
/// Stateless. It never touches the session or the profile, and never fails:
/// an unavailable telephony handler becomes a user-facing message.
pub struct InitiateRecoveryContact {
    telephony: Arc<dyn TelephonyPort>,
    contact: RecoveryContact,
}

impl InitiateRecoveryContact {
    pub fn new(telephony: Arc<dyn TelephonyPort>, contact: RecoveryContact) -> Self {
        Self { telephony, contact }
    }

    pub async fn execute(&self) -> RecoveryOutcome {
        let contact = &self.contact;
        if !contact.phone_number.is_dialable() {
            warn!("recovery contact has no dialable phone number configured");
            return RecoveryOutcome::Unavailable {
                message: "No manager phone number is configured. Please ask your manager for help signing in."
                    .to_string(),
            };
        }

        match self.telephony.dial(&contact.phone_number).await {
            Ok(()) => {
                info!(contact = %contact.name, "recovery call started");
                RecoveryOutcome::Dialing {
                    contact_name: contact.name.clone(),
                }
            }
            Err(err) => {
                warn!(error = %err, "recovery call could not be started");
                RecoveryOutcome::Unavailable {
                    message: unavailable_message(contact, &err),
                }
            }
        }
    }
}

fn unavailable_message(contact: &RecoveryContact, err: &TelephonyError) -> String {
    let who = if contact.name.trim().is_empty() {
        "your manager".to_string()
    } else {
        contact.name.clone()
    };
    match err {
        TelephonyError::Unavailable(_) => format!(
            "Calling isn't available on this device. Please contact {} at {}.",
            who, contact.phone_number
        ),
        TelephonyError::InvalidNumber(_) => format!(
            "The configured number for {} can't be dialed. Please ask your manager for help signing in.",
            who
        ),
    }
}
