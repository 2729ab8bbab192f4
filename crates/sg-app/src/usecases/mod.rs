//! Business logic use cases
//!
//! - [`SessionAuthority`]: the single writer of the session.
//! - [`GatePolicy`]: decides where a session belongs and navigates there.
//! - [`SessionGate`]: drives the gate state machine from session changes.
//! - [`InitiateRecoveryContact`]: forgot-password call to the manager.

pub mod gate;
pub mod recovery;
pub mod session;

pub use gate::{GateError, GatePolicy, SessionGate};
pub use recovery::{InitiateRecoveryContact, RecoveryOutcome};
pub use session::{AuthError, SessionAuthority};
