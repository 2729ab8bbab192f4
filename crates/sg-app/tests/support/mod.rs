#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use sg_app::{App, AppDeps};
use sg_core::gate::ScreenId;
use sg_core::ports::{
    NavigationPort, ProfileLookupError, ProfileLookupPort, SessionStoragePort, StorageError,
    TelephonyError, TelephonyPort,
};
use sg_core::profile::EmployeeProfile;
use sg_core::recovery::PhoneNumber;
use sg_core::session::CredentialToken;
use sg_core::AppConfig;

pub const SESSION_KEY: &str = "session.credential";

#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    pub fail_delete: AtomicBool,
}

impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        let storage = Self::default();
        storage
            .values
            .lock()
            .unwrap()
            .insert(SESSION_KEY.to_string(), token.to_string());
        storage
    }

    pub fn token(&self) -> Option<String> {
        self.values.lock().unwrap().get(SESSION_KEY).cloned()
    }
}

#[async_trait]
impl SessionStoragePort for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(StorageError::PermissionDenied("keychain locked".into()));
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Profile directory the test can "provision" into. Optionally holds every
/// lookup until released.
#[derive(Default)]
pub struct ProfileDirectory {
    provisioned: AtomicBool,
    offline: AtomicBool,
    pub calls: AtomicUsize,
    hold: AtomicBool,
    pub started: Notify,
    pub release: Notify,
}

impl ProfileDirectory {
    pub fn provision(&self) {
        self.provisioned.store(true, Ordering::SeqCst);
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn hold_lookups(&self) {
        self.hold.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProfileLookupPort for ProfileDirectory {
    async fn lookup(
        &self,
        _identity: &CredentialToken,
    ) -> Result<EmployeeProfile, ProfileLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hold.load(Ordering::SeqCst) {
            self.started.notify_one();
            self.release.notified().await;
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(ProfileLookupError::Network("connection refused".into()));
        }
        Ok(EmployeeProfile {
            exists: self.provisioned.load(Ordering::SeqCst),
        })
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    screens: Mutex<Vec<ScreenId>>,
}

impl RecordingNavigator {
    pub fn screens(&self) -> Vec<ScreenId> {
        self.screens.lock().unwrap().clone()
    }
}

#[async_trait]
impl NavigationPort for RecordingNavigator {
    async fn replace(&self, screen: ScreenId) -> anyhow::Result<()> {
        self.screens.lock().unwrap().push(screen);
        Ok(())
    }
}

pub struct NoTelephony;

#[async_trait]
impl TelephonyPort for NoTelephony {
    async fn dial(&self, _number: &PhoneNumber) -> Result<(), TelephonyError> {
        Err(TelephonyError::Unavailable("tablet without telephony".into()))
    }
}

pub struct Harness {
    pub app: App,
    pub storage: Arc<MemoryStorage>,
    pub profiles: Arc<ProfileDirectory>,
    pub navigator: Arc<RecordingNavigator>,
}

pub async fn build(storage: MemoryStorage, profiles: ProfileDirectory) -> Harness {
    let storage = Arc::new(storage);
    let profiles = Arc::new(profiles);
    let navigator = Arc::new(RecordingNavigator::default());

    let mut config = AppConfig::default();
    config.storage.session_key = SESSION_KEY.to_string();
    config.profile_service.lookup_retries = 0;
    config.recovery_contact.name = "Store Manager".to_string();
    config.recovery_contact.phone_number = PhoneNumber::new("+1 555 0100");

    let app = App::new(
        AppDeps {
            session_storage: storage.clone(),
            profiles: profiles.clone(),
            navigator: navigator.clone(),
            telephony: Arc::new(NoTelephony),
        },
        &config,
    )
    .await;

    Harness {
        app,
        storage,
        profiles,
        navigator,
    }
}
