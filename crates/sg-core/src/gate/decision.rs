use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::EmployeeProfile;

/// Where a user belongs, derived from session and profile facts. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateDecision {
    Login,
    AccountNotSetup,
    Home,
}

impl GateDecision {
    /// Decision for an authenticated session once the profile fact is known.
    ///
    /// Unauthenticated sessions are always [`GateDecision::Login`]; callers
    /// must not look a profile up for them in the first place.
    pub fn for_profile(profile: EmployeeProfile) -> Self {
        if profile.exists {
            Self::Home
        } else {
            Self::AccountNotSetup
        }
    }

    /// Screen the navigation host shows for this decision.
    pub fn screen(self) -> ScreenId {
        match self {
            Self::Login => ScreenId::Login,
            Self::AccountNotSetup => ScreenId::AccountNotSetupView,
            Self::Home => ScreenId::HomeView,
        }
    }
}

/// Screen identifiers understood by the navigation host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenId {
    Login,
    AccountNotSetupView,
    HomeView,
}

impl ScreenId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::AccountNotSetupView => "AccountNotSetupView",
            Self::HomeView => "HomeView",
        }
    }

    pub fn decision(self) -> GateDecision {
        match self {
            Self::Login => GateDecision::Login,
            Self::AccountNotSetupView => GateDecision::AccountNotSetup,
            Self::HomeView => GateDecision::Home,
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
