//! Gate policy.
//!
//! `evaluate` maps a session to a [`GateDecision`], consulting the profile
//! service only for authenticated sessions. `apply` performs the matching
//! replace-style navigation and is a no-op when that screen is already shown.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use sg_core::gate::{GateConfig, GateDecision, ScreenId};
use sg_core::ports::{NavigationPort, ProfileLookupPort};
use sg_core::profile::{EmployeeProfile, ProfileLookupFailure};
use sg_core::session::{CredentialToken, Session};

use super::GateError;

pub struct GatePolicy {
    profiles: Arc<dyn ProfileLookupPort>,
    navigator: Arc<dyn NavigationPort>,
    config: GateConfig,
    /// Last screen successfully handed to the navigator.
    applied: Mutex<Option<ScreenId>>,
}

impl GatePolicy {
    pub fn new(
        profiles: Arc<dyn ProfileLookupPort>,
        navigator: Arc<dyn NavigationPort>,
        config: GateConfig,
    ) -> Self {
        Self {
            profiles,
            navigator,
            config,
            applied: Mutex::new(None),
        }
    }

    /// Decide where `session` belongs.
    ///
    /// Unauthenticated sessions short-circuit to [`GateDecision::Login`]
    /// without a lookup. Lookup failures are returned as such and never read
    /// as "profile absent".
    pub async fn evaluate(&self, session: &Session) -> Result<GateDecision, ProfileLookupFailure> {
        let Some(identity) = session.credential() else {
            return Ok(GateDecision::Login);
        };

        let profile = self.lookup_with_retry(identity).await?;
        debug!(exists = profile.exists, "profile lookup resolved");
        Ok(GateDecision::for_profile(profile))
    }

    /// Navigate to the screen for `decision`.
    ///
    /// Returns `false` when that screen was already applied and nothing happened.
    pub async fn apply(&self, decision: GateDecision) -> Result<bool, GateError> {
        self.navigate(decision.screen()).await
    }

    /// Screen last handed to the navigation host, if any.
    pub async fn applied_screen(&self) -> Option<ScreenId> {
        *self.applied.lock().await
    }

    pub(crate) async fn navigate(&self, screen: ScreenId) -> Result<bool, GateError> {
        let mut applied = self.applied.lock().await;
        if *applied == Some(screen) {
            debug!(%screen, "screen already applied, skipping navigation");
            return Ok(false);
        }

        let previous = *applied;
        self.navigator
            .replace(screen)
            .await
            .map_err(GateError::Navigation)?;
        info!(from = ?previous, to = %screen, "navigated");
        *applied = Some(screen);
        Ok(true)
    }

    async fn lookup_with_retry(
        &self,
        identity: &CredentialToken,
    ) -> Result<EmployeeProfile, ProfileLookupFailure> {
        let mut attempt: u32 = 0;
        loop {
            let failure =
                match tokio::time::timeout(self.config.lookup_timeout, self.profiles.lookup(identity))
                    .await
                {
                    Ok(Ok(profile)) => return Ok(profile),
                    Ok(Err(err)) => {
                        warn!(attempt, error = %err, "profile lookup failed");
                        ProfileLookupFailure::from(&err)
                    }
                    Err(_) => {
                        warn!(
                            attempt,
                            timeout_ms = self.config.lookup_timeout.as_millis() as u64,
                            "profile lookup timed out"
                        );
                        ProfileLookupFailure::Timeout
                    }
                };

            if !failure.is_transient() || attempt >= self.config.lookup_retries {
                return Err(failure);
            }
            attempt += 1;
            tokio::time::sleep(self.config.retry_backoff).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use sg_core::ports::ProfileLookupError;
    use sg_core::session::SessionEpoch;

    mockall::mock! {
        pub ProfileLookup {}

        #[async_trait]
        impl ProfileLookupPort for ProfileLookup {
            async fn lookup(
                &self,
                identity: &CredentialToken,
            ) -> Result<EmployeeProfile, ProfileLookupError>;
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        screens: std::sync::Mutex<Vec<ScreenId>>,
    }

    impl RecordingNavigator {
        fn screens(&self) -> Vec<ScreenId> {
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

    struct FailingNavigator;

    #[async_trait]
    impl NavigationPort for FailingNavigator {
        async fn replace(&self, _screen: ScreenId) -> anyhow::Result<()> {
            anyhow::bail!("host not ready")
        }
    }

    /// Fails with `failure` for the first `failures` calls, then resolves.
    struct FlakyProfileLookup {
        calls: AtomicUsize,
        failures: usize,
        failure: fn() -> ProfileLookupError,
        profile: EmployeeProfile,
    }

    #[async_trait]
    impl ProfileLookupPort for FlakyProfileLookup {
        async fn lookup(
            &self,
            _identity: &CredentialToken,
        ) -> Result<EmployeeProfile, ProfileLookupError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err((self.failure)());
            }
            Ok(self.profile)
        }
    }

    struct HangingProfileLookup;

    #[async_trait]
    impl ProfileLookupPort for HangingProfileLookup {
        async fn lookup(
            &self,
            _identity: &CredentialToken,
        ) -> Result<EmployeeProfile, ProfileLookupError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(EmployeeProfile::provisioned())
        }
    }

    fn config(retries: u32) -> GateConfig {
        GateConfig {
            lookup_timeout: Duration::from_secs(1),
            lookup_retries: retries,
            retry_backoff: Duration::ZERO,
        }
    }

    fn signed_in() -> Session {
        Session::authenticated(
            CredentialToken::parse("token-1").unwrap(),
            SessionEpoch::INITIAL.next(),
        )
    }

    fn policy(profiles: Arc<dyn ProfileLookupPort>, retries: u32) -> GatePolicy {
        GatePolicy::new(profiles, Arc::new(RecordingNavigator::default()), config(retries))
    }

    #[tokio::test]
    async fn test_unauthenticated_session_never_looks_up_profile() {
        let mut lookup = MockProfileLookup::new();
        lookup.expect_lookup().times(0);
        let policy = policy(Arc::new(lookup), 2);

        let decision = policy.evaluate(&Session::default()).await;

        assert_eq!(decision, Ok(GateDecision::Login));
    }

    #[tokio::test]
    async fn test_authenticated_session_routes_by_profile_existence() {
        for (exists, expected) in [
            (false, GateDecision::AccountNotSetup),
            (true, GateDecision::Home),
        ] {
            let mut lookup = MockProfileLookup::new();
            lookup
                .expect_lookup()
                .withf(|identity| identity.expose() == "token-1")
                .times(1)
                .returning(move |_| Ok(EmployeeProfile { exists }));
            let policy = policy(Arc::new(lookup), 0);

            assert_eq!(policy.evaluate(&signed_in()).await, Ok(expected));
        }
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let lookup = Arc::new(FlakyProfileLookup {
            calls: AtomicUsize::new(0),
            failures: 2,
            failure: || ProfileLookupError::Network("connection reset".into()),
            profile: EmployeeProfile::provisioned(),
        });
        let policy = policy(lookup.clone(), 2);

        assert_eq!(policy.evaluate(&signed_in()).await, Ok(GateDecision::Home));
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retries_exhausted_surface_failure_not_absence() {
        let lookup = Arc::new(FlakyProfileLookup {
            calls: AtomicUsize::new(0),
            failures: usize::MAX,
            failure: || ProfileLookupError::Status { status: 503 },
            profile: EmployeeProfile::missing(),
        });
        let policy = policy(lookup.clone(), 1);

        assert_eq!(
            policy.evaluate(&signed_in()).await,
            Err(ProfileLookupFailure::Server { status: 503 })
        );
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_rejected_credential_is_not_retried() {
        let lookup = Arc::new(FlakyProfileLookup {
            calls: AtomicUsize::new(0),
            failures: usize::MAX,
            failure: || ProfileLookupError::Rejected { status: 401 },
            profile: EmployeeProfile::missing(),
        });
        let policy = policy(lookup.clone(), 3);

        assert_eq!(
            policy.evaluate(&signed_in()).await,
            Err(ProfileLookupFailure::Rejected)
        );
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_a_lookup_failure() {
        let policy = policy(Arc::new(HangingProfileLookup), 0);

        assert_eq!(
            policy.evaluate(&signed_in()).await,
            Err(ProfileLookupFailure::Timeout)
        );
    }

    #[tokio::test]
    async fn test_apply_twice_navigates_once() {
        let navigator = Arc::new(RecordingNavigator::default());
        let policy = GatePolicy::new(
            Arc::new(MockProfileLookup::new()),
            navigator.clone(),
            config(0),
        );

        assert!(policy.apply(GateDecision::Home).await.unwrap());
        assert!(!policy.apply(GateDecision::Home).await.unwrap());

        assert_eq!(navigator.screens(), vec![ScreenId::HomeView]);
        assert_eq!(policy.applied_screen().await, Some(ScreenId::HomeView));
    }

    #[tokio::test]
    async fn test_failed_navigation_is_retried_on_next_apply() {
        let policy = GatePolicy::new(
            Arc::new(MockProfileLookup::new()),
            Arc::new(FailingNavigator),
            config(0),
        );

        let err = policy.apply(GateDecision::Login).await.unwrap_err();

        assert!(matches!(err, GateError::Navigation(_)));
        assert_eq!(policy.applied_screen().await, None);
    }
}
