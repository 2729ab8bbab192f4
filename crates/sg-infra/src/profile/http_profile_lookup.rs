//! HTTP client for the employee profile service.
//!
//! `GET {base_url}/employees/me` with the credential as a bearer token.
//! Status codes map onto [`ProfileLookupError`] / [`EmployeeProfile`]:
//!
//! | Status | Result |
//! |---|---|
//! | 200 | provisioned, unless the body says `{"exists": false}` |
//! | 404 | not provisioned |
//! | 401, 403 | `Rejected` |
//! | other | `Status` |
//!
//! Timeouts and retries are owned by the gate policy, not by this client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use sg_core::ports::{ProfileLookupError, ProfileLookupPort};
use sg_core::{CredentialToken, EmployeeProfile};

pub const PROFILE_PATH: &str = "employees/me";

#[derive(Debug, Deserialize)]
struct ProfileBody {
    #[serde(default)]
    exists: Option<bool>,
}

pub struct HttpProfileLookup {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpProfileLookup {
    pub fn new(base_url: &str) -> Result<Self, ProfileLookupError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ProfileLookupError::Network(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), PROFILE_PATH);
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn parse_success_body(body: &str) -> Result<EmployeeProfile, ProfileLookupError> {
    if body.trim().is_empty() {
        return Ok(EmployeeProfile::provisioned());
    }
    let parsed: ProfileBody = serde_json::from_str(body)
        .map_err(|e| ProfileLookupError::InvalidResponse(e.to_string()))?;
    Ok(EmployeeProfile {
        exists: parsed.exists.unwrap_or(true),
    })
}

fn map_status(code: StatusCode) -> ProfileLookupError {
    match code {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProfileLookupError::Rejected {
            status: code.as_u16(),
        },
        _ => ProfileLookupError::Status {
            status: code.as_u16(),
        },
    }
}

#[async_trait]
impl ProfileLookupPort for HttpProfileLookup {
    async fn lookup(
        &self,
        identity: &CredentialToken,
    ) -> Result<EmployeeProfile, ProfileLookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .bearer_auth(identity.expose())
            .send()
            .await
            .map_err(|e| ProfileLookupError::Network(e.without_url().to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "profile service responded");

        match status {
            StatusCode::NOT_FOUND => Ok(EmployeeProfile::missing()),
            StatusCode::OK => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| ProfileLookupError::Network(e.without_url().to_string()))?;
                parse_success_body(&body)
            }
            other => Err(map_status(other)),
        }
    }
}
