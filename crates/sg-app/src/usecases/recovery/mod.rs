//! Recovery use cases.

mod initiate_recovery_contact;

pub use initiate_recovery_contact::{InitiateRecoveryContact, RecoveryOutcome};
