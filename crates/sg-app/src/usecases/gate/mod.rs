//! Gate use cases.
//!
//! [`GatePolicy`] answers "where does this session belong" and moves the
//! navigation host there. [`SessionGate`] ties it to the session authority and
//! the gate state machine.

mod context;
mod policy;
mod session_gate;

pub use policy::GatePolicy;
pub use session_gate::SessionGate;

use crate::usecases::session::AuthError;

/// Errors produced by the gate.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("sign-in failed: {0}")]
    Auth(#[from] AuthError),
    #[error("navigation failed: {0}")]
    Navigation(#[source] anyhow::Error),
}
