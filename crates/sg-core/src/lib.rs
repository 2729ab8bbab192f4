//! # sg-core
//!
//! Core domain models and gate policy for StaffGate.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! Everything that touches a device, a disk or the network is reached through
//! the traits in [`ports`].

pub mod config;
pub mod gate;
pub mod ports;
pub mod profile;
pub mod recovery;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use gate::{
    GateAction, GateConfig, GateDecision, GateEvent, GateState, GateStateMachine, ScreenId,
};
pub use profile::{EmployeeProfile, ProfileLookupFailure};
pub use recovery::{PhoneNumber, RecoveryContact};
pub use session::{CredentialToken, Session, SessionEpoch};
