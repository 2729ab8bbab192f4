//! Employee profile facts.
//!
//! Profiles are owned by the HR backend. This crate only ever sees the single
//! fact the gate needs: whether a record exists for the signed-in identity.

use serde::{Deserialize, Serialize};

/// Whether a backend employee record exists for the authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub exists: bool,
}

impl EmployeeProfile {
    pub fn provisioned() -> Self {
        Self { exists: true }
    }

    pub fn missing() -> Self {
        Self { exists: false }
    }
}

/// Why provisioning could not be confirmed.
///
/// None of these mean "the profile is absent". The gate keeps the user where
/// they are and offers a retry instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileLookupFailure {
    /// The lookup did not finish within the configured timeout.
    Timeout,
    /// Transport-level failure (DNS, TLS, connection reset...).
    Network,
    /// The profile service answered with an unexpected status.
    Server { status: u16 },
    /// The profile service refused the credential.
    Rejected,
    /// The response could not be understood.
    InvalidResponse,
}

impl ProfileLookupFailure {
    /// Whether another attempt may succeed without user action.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout | Self::Network => true,
            Self::Server { status } => *status >= 500,
            Self::Rejected | Self::InvalidResponse => false,
        }
    }

    /// Short user-facing explanation for the "unable to verify account" notice.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout | Self::Network => {
                "We couldn't reach the server to verify your account. Check your connection and try again."
            }
            Self::Server { .. } | Self::InvalidResponse => {
                "We're unable to verify your account right now. Please try again later."
            }
            Self::Rejected => "Your sign-in could not be verified. Sign out and sign in again, or contact your manager.",
        }
    }
}
