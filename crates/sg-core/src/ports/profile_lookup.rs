use async_trait::async_trait;
use thiserror::Error;

use crate::profile::{EmployeeProfile, ProfileLookupFailure};
use crate::session::CredentialToken;

/// Errors reported by a profile service adapter.
#[derive(Debug, Error)]
pub enum ProfileLookupError {
    #[error("profile service unreachable: {0}")]
    Network(String),

    #[error("profile service returned status {status}")]
    Status { status: u16 },

    #[error("profile service rejected the credential (status {status})")]
    Rejected { status: u16 },

    #[error("invalid profile service response: {0}")]
    InvalidResponse(String),
}

impl From<&ProfileLookupError> for ProfileLookupFailure {
    fn from(err: &ProfileLookupError) -> Self {
        match err {
            ProfileLookupError::Network(_) => Self::Network,
            ProfileLookupError::Status { status } => Self::Server { status: *status },
            ProfileLookupError::Rejected { .. } => Self::Rejected,
            ProfileLookupError::InvalidResponse(_) => Self::InvalidResponse,
        }
    }
}

/// Backend lookup of the employee record tied to an identity.
#[async_trait]
pub trait ProfileLookupPort: Send + Sync {
    /// Whether a profile exists for `identity`. A definite "no such
    /// employee" answer is `Ok(EmployeeProfile { exists: false })`, never an error.
    async fn lookup(&self, identity: &CredentialToken)
        -> Result<EmployeeProfile, ProfileLookupError>;
}
