//! Host-facing commands.
//!
//! Each command opens a `command.*` span, calls one use case and converts
//! the result into a DTO or a user-facing error string.

pub mod dto;
pub mod error;
pub mod recovery;
pub mod session;

pub use dto::{GateStateDto, RecoveryDto};
pub use error::map_err;
pub use recovery::contact_manager;
pub use session::{current_screen, refresh, sign_in, sign_out};
