//! StaffGate Application Orchestration Layer
//!
//! This crate contains the session/profile gate use cases and their wiring.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::App;
pub use deps::AppDeps;
pub use usecases::{
    AuthError, GateError, GatePolicy, InitiateRecoveryContact, RecoveryOutcome, SessionAuthority,
    SessionGate,
};
