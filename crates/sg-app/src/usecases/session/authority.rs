//! Session authority.
//!
//! Single source of truth for "is this device currently authenticated" and the
//! only component allowed to change that fact. Every mutation runs under one
//! lock so the in-memory session and durable storage never disagree.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use sg_core::ports::{SessionStoragePort, StorageError};
use sg_core::session::{CredentialToken, EmptyCredentialToken, Session, SessionEpoch};

/// Sign-in failures, surfaced synchronously to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("credential token is empty")]
    EmptyToken,
    #[error("failed to persist credential: {0}")]
    Persist(#[source] StorageError),
}

impl From<EmptyCredentialToken> for AuthError {
    fn from(_: EmptyCredentialToken) -> Self {
        Self::EmptyToken
    }
}

pub struct SessionAuthority {
    storage: Arc<dyn SessionStoragePort>,
    storage_key: String,
    session: Mutex<Session>,
}

impl SessionAuthority {
    /// Create a signed-out authority without touching storage.
    pub fn new(storage: Arc<dyn SessionStoragePort>, storage_key: impl Into<String>) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
            session: Mutex::new(Session::default()),
        }
    }

    /// Create an authority from whatever credential is persisted on the device.
    ///
    /// An unreadable or empty persisted value leaves the device signed out; it
    /// is never an error at startup.
    pub async fn restore(
        storage: Arc<dyn SessionStoragePort>,
        storage_key: impl Into<String>,
    ) -> Self {
        let authority = Self::new(storage, storage_key);
        match authority.storage.get(&authority.storage_key).await {
            Ok(Some(raw)) => match CredentialToken::parse(raw) {
                Ok(token) => {
                    let mut session = authority.session.lock().await;
                    *session = Session::authenticated(token, session.epoch().next());
                    info!(epoch = session.epoch().value(), "restored persisted session");
                }
                Err(_) => warn!("persisted credential is empty, starting signed out"),
            },
            Ok(None) => debug!("no persisted session"),
            Err(err) => warn!(error = %err, "failed to read persisted session, starting signed out"),
        }
        authority
    }

    /// Persist `raw_token` and mark the session authenticated.
    ///
    /// The token is written first; if that fails the session is left exactly
    /// as it was.
    pub async fn sign_in(&self, raw_token: impl Into<String>) -> Result<Session, AuthError> {
        let token = CredentialToken::parse(raw_token)?;

        let mut session = self.session.lock().await;
        self.storage
            .put(&self.storage_key, token.expose())
            .await
            .map_err(|err| {
                warn!(error = %err, "failed to persist credential, sign-in aborted");
                AuthError::Persist(err)
            })?;

        *session = Session::authenticated(token, session.epoch().next());
        info!(epoch = session.epoch().value(), "signed in");
        Ok(session.clone())
    }

    /// Clear the session in memory, then in storage. Always succeeds.
    ///
    /// A storage failure is logged and otherwise ignored: an orphaned token on
    /// disk is preferable to a device stuck in "authenticated".
    pub async fn sign_out(&self) -> Session {
        let mut session = self.session.lock().await;
        *session = Session::signed_out(session.epoch().next());

        if let Err(err) = self.storage.delete(&self.storage_key).await {
            warn!(error = %err, "failed to clear persisted credential, continuing signed out");
        }

        info!(epoch = session.epoch().value(), "signed out");
        session.clone()
    }

    /// Current session snapshot. Local state only.
    pub async fn current_session(&self) -> Session {
        self.session.lock().await.clone()
    }

    pub async fn epoch(&self) -> SessionEpoch {
        self.session.lock().await.epoch()
    }
}
