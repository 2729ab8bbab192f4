//! Port interfaces for the application layer
//!
//! Ports define the contract between the gate use cases and the device,
//! storage and backend implementations. The core stays independent of
//! every one of them, which keeps the gate testable without a live storage
//! backend or profile service.
//!
//! ## Port Placement Guidelines
//!
//! A trait belongs here when it represents a capability the gate consumes and
//! the infrastructure or platform layer implements. Helpers used by a single
//! use case stay next to that use case.

mod navigation;
mod profile_lookup;
mod session_storage;
mod telephony;

pub use navigation::NavigationPort;
pub use profile_lookup::{ProfileLookupError, ProfileLookupPort};
pub use session_storage::{SessionStoragePort, StorageError};
pub use telephony::{TelephonyError, TelephonyPort};
