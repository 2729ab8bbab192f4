//! Session domain models.
//!
//! A [`Session`] is the local record of whether this device currently holds
//! credentials. It is owned by the session authority in `sg-app`; everything
//! else only ever sees snapshots of it.

mod token;

pub use token::{CredentialToken, EmptyCredentialToken};

/// Monotonic counter bumped on every sign-in and sign-out.
///
/// Work started under one epoch (for example a profile lookup) must not drive
/// state changes once the epoch has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SessionEpoch(u64);

impl SessionEpoch {
    pub const INITIAL: SessionEpoch = SessionEpoch(0);

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Snapshot of the authentication state of the current device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    credential: Option<CredentialToken>,
    epoch: SessionEpoch,
}

impl Session {
    /// A session without credentials.
    pub fn signed_out(epoch: SessionEpoch) -> Self {
        Self {
            credential: None,
            epoch,
        }
    }

    /// A session holding `credential`.
    pub fn authenticated(credential: CredentialToken, epoch: SessionEpoch) -> Self {
        Self {
            credential: Some(credential),
            epoch,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// The opaque token, present iff the session is authenticated.
    pub fn credential(&self) -> Option<&CredentialToken> {
        self.credential.as_ref()
    }

    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::signed_out(SessionEpoch::INITIAL)
    }
}
