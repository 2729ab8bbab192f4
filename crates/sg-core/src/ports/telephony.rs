use async_trait::async_trait;
use thiserror::Error;

use crate::recovery::PhoneNumber;

#[derive(Debug, Error)]
pub enum TelephonyError {
    /// No handler for `tel:` links on this device, or it refused to start.
    #[error("telephony handler unavailable: {0}")]
    Unavailable(String),

    #[error("phone number is not dialable: {0}")]
    InvalidNumber(String),
}

/// Device telephony handler.
#[async_trait]
pub trait TelephonyPort: Send + Sync {
    async fn dial(&self, number: &PhoneNumber) -> Result<(), TelephonyError>;
}
