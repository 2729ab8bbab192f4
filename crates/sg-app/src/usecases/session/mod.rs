//! Session use cases.

mod authority;

pub use authority::{AuthError, SessionAuthority};
