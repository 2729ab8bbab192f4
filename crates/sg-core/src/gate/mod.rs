//! Gate domain module.
//!
//! Routing of a (possibly) signed-in user to Login, AccountNotSetup or Home.

mod config;
mod decision;
pub mod state_machine;

pub use config::GateConfig;
pub use decision::{GateDecision, ScreenId};
pub use state_machine::{GateAction, GateEvent, GateState, GateStateMachine};
