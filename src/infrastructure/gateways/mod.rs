//! HTTP clients for the upstream services.
//!
//! - [`GeminiClient`] - candidate generation via Google Gemini
//! - [`GoDaddyClient`] - bulk availability checks via GoDaddy

pub mod gemini;
pub mod godaddy;

pub use gemini::{GeminiClient, GeminiError};
pub use godaddy::{GoDaddyClient, GoDaddyCredentials, GoDaddyError};

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domain::gateways::{AvailabilityOracle, SuggestionSource};

/// Builds both gateways from configuration, sharing one HTTP client.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_gateways(
    config: &Config,
) -> anyhow::Result<(Arc<dyn SuggestionSource>, Arc<dyn AvailabilityOracle>)> {
    let http = reqwest::Client::builder()
        .user_agent(concat!("domainly/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let source: Arc<dyn SuggestionSource> = Arc::new(GeminiClient::new(
        http.clone(),
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
        config.google_api_key.clone(),
    ));

    let oracle: Arc<dyn AvailabilityOracle> = Arc::new(GoDaddyClient::new(
        http,
        config.godaddy_base_url.clone(),
        GoDaddyCredentials::from_parts(
            config.godaddy_api_key.clone(),
            config.godaddy_api_secret.clone(),
        ),
        config.registrar_timeout_secs.map(Duration::from_secs),
    ));

    Ok((source, oracle))
}
