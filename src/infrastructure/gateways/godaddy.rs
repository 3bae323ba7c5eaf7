//! GoDaddy implementation of [`AvailabilityOracle`].

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use url::Url;

use crate::domain::entities::AvailabilityVerdict;
use crate::domain::gateways::AvailabilityOracle;
use crate::error::AppError;

pub const DEFAULT_GODADDY_BASE_URL: &str = "https://api.ote-godaddy.com";

const AVAILABLE_PATH: &str = "v1/domains/available";

/// GoDaddy API key and secret.
#[derive(Clone)]
pub struct GoDaddyCredentials {
    key: String,
    secret: String,
}

impl GoDaddyCredentials {
    /// Returns credentials only when both parts are present and non-blank.
    pub fn from_parts(key: Option<String>, secret: Option<String>) -> Option<Self> {
        let key = key.filter(|k| !k.trim().is_empty())?;
        let secret = secret.filter(|s| !s.trim().is_empty())?;
        Some(Self { key, secret })
    }

    fn authorization(&self) -> String {
        format!("sso-key {}:{}", self.key, self.secret)
    }
}

impl fmt::Debug for GoDaddyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoDaddyCredentials")
            .field("key", &self.key)
            .field("secret", &"***")
            .finish()
    }
}

/// Client for the GoDaddy bulk availability endpoint.
#[derive(Clone)]
pub struct GoDaddyClient {
    http: Client,
    base_url: Url,
    credentials: Option<GoDaddyCredentials>,
    timeout: Option<Duration>,
}

impl GoDaddyClient {
    pub fn new(
        http: Client,
        base_url: Url,
        credentials: Option<GoDaddyCredentials>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            http,
            base_url: with_trailing_slash(base_url),
            credentials,
            timeout,
        }
    }

    fn endpoint(&self) -> Result<Url, GoDaddyError> {
        let mut url = self.base_url.join(AVAILABLE_PATH)?;
        url.query_pairs_mut().append_pair("checkType", "FAST");
        Ok(url)
    }

    /// Checks availability of `domains` in one request.
    pub async fn check_bulk(
        &self,
        domains: &[String],
    ) -> Result<Vec<AvailabilityVerdict>, GoDaddyError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(GoDaddyError::MissingCredentials)?;

        let mut request = self
            .http
            .post(self.endpoint()?)
            .header("Authorization", credentials.authorization())
            .json(domains);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GoDaddyError::Status { status, body });
        }

        let payload: BulkAvailabilityResponse = response.json().await?;

        for error in &payload.errors {
            tracing::warn!(
                domain = error.domain.as_deref().unwrap_or("-"),
                code = error.code.as_deref().unwrap_or("-"),
                message = error.message.as_deref().unwrap_or("-"),
                "GoDaddy reported a per-domain error"
            );
        }

        Ok(payload
            .domains
            .into_iter()
            .map(|d| AvailabilityVerdict::new(d.domain, d.available))
            .collect())
    }
}

#[async_trait]
impl AvailabilityOracle for GoDaddyClient {
    fn ensure_configured(&self) -> Result<(), AppError> {
        match self.credentials {
            Some(_) => Ok(()),
            None => Err(GoDaddyError::MissingCredentials.into()),
        }
    }

    async fn check(&self, domains: &[String]) -> Result<Vec<AvailabilityVerdict>, AppError> {
        if domains.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.check_bulk(domains).await?)
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[derive(Debug, Deserialize)]
struct BulkAvailabilityResponse {
    #[serde(default)]
    domains: Vec<DomainAvailability>,
    #[serde(default)]
    errors: Vec<DomainError>,
}

#[derive(Debug, Deserialize)]
struct DomainAvailability {
    domain: String,
    available: bool,
}

#[derive(Debug, Deserialize)]
struct DomainError {
    code: Option<String>,
    domain: Option<String>,
    message: Option<String>,
}

/// Errors produced by the GoDaddy client.
#[derive(Debug, Error)]
pub enum GoDaddyError {
    #[error("GoDaddy API credentials missing")]
    MissingCredentials,
    #[error("failed to build url: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl From<GoDaddyError> for AppError {
    fn from(e: GoDaddyError) -> Self {
        match e {
            GoDaddyError::MissingCredentials => AppError::configuration(
                GoDaddyError::MissingCredentials.to_string(),
                json!({ "upstream": "godaddy" }),
            ),
            other => {
                tracing::error!(error = %other, "GoDaddy availability check failed");
                AppError::gateway("GoDaddy API error", json!({ "upstream": "godaddy" }))
            }
        }
    }
}
