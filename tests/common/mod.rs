#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use url::Url;
use wiremock::MockServer;

use domainly::application::services::{PromptLogService, SuggestionPolicy, SuggestionService};
use domainly::config::{Config, DEFAULT_CORS_ORIGINS};
use domainly::domain::entities::{NewPromptLog, PromptLog};
use domainly::domain::gateways::{AvailabilityOracle, SuggestionSource};
use domainly::domain::repositories::PromptLogRepository;
use domainly::error::AppError;
use domainly::infrastructure::gateways::{GeminiClient, GoDaddyClient, GoDaddyCredentials};
use domainly::state::AppState;

pub const TEST_MODEL: &str = "test-model";
pub const TEST_API_KEY: &str = "test-gemini-key";
pub const TEST_GODADDY_KEY: &str = "test-key";
pub const TEST_GODADDY_SECRET: &str = "test-secret";

/// Path the Gemini client posts to on the mock server.
pub fn gemini_path() -> String {
    format!("/models/{TEST_MODEL}:generateContent")
}

pub const GODADDY_PATH: &str = "/v1/domains/available";

/// Prompt log kept in memory, optionally failing every call.
#[derive(Default)]
pub struct InMemoryPromptLogRepository {
    entries: Mutex<Vec<PromptLog>>,
    failing: bool,
}

impl InMemoryPromptLogRepository {
    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn entries(&self) -> Vec<PromptLog> {
        self.entries.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl PromptLogRepository for InMemoryPromptLogRepository {
    async fn create(&self, entry: NewPromptLog) -> Result<PromptLog, AppError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        let log = PromptLog {
            id: entries.len() as i64 + 1,
            created_at: Utc::now(),
            ip: entry.ip,
            user_agent: entry.user_agent,
            idea: entry.idea,
            suggestions: entry.suggestions,
        };
        entries.push(log.clone());
        Ok(log)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<PromptLog>, AppError> {
        self.check()?;
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().rev().take(limit as usize).cloned().collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.entries.lock().unwrap().len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

/// Upstream setup for a test state.
pub struct Upstreams<'a> {
    pub server: &'a MockServer,
    pub api_key: Option<&'a str>,
    pub registrar_credentials: bool,
}

impl<'a> Upstreams<'a> {
    pub fn configured(server: &'a MockServer) -> Self {
        Self {
            server,
            api_key: Some(TEST_API_KEY),
            registrar_credentials: true,
        }
    }
}

pub fn gemini_client(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
    GeminiClient::new(
        reqwest::Client::new(),
        Url::parse(&server.uri()).unwrap(),
        TEST_MODEL,
        api_key.map(str::to_string),
    )
}

pub fn godaddy_client(server: &MockServer, with_credentials: bool) -> GoDaddyClient {
    let credentials = if with_credentials {
        GoDaddyCredentials::from_parts(
            Some(TEST_GODADDY_KEY.to_string()),
            Some(TEST_GODADDY_SECRET.to_string()),
        )
    } else {
        None
    };

    GoDaddyClient::new(
        reqwest::Client::new(),
        Url::parse(&server.uri()).unwrap(),
        credentials,
        None,
    )
}

pub fn create_test_state(
    upstreams: Upstreams<'_>,
    repo: Arc<InMemoryPromptLogRepository>,
    log_enabled: bool,
) -> AppState {
    let source: Arc<dyn SuggestionSource> =
        Arc::new(gemini_client(upstreams.server, upstreams.api_key));
    let oracle: Arc<dyn AvailabilityOracle> = Arc::new(godaddy_client(
        upstreams.server,
        upstreams.registrar_credentials,
    ));
    let repo: Arc<dyn PromptLogRepository> = repo;

    AppState::new(
        Arc::new(SuggestionService::new(
            source,
            oracle,
            SuggestionPolicy::default(),
        )),
        Arc::new(PromptLogService::new(repo, log_enabled)),
    )
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/test".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        behind_proxy: true,
        cors_allowed_origins: DEFAULT_CORS_ORIGINS
            .split(',')
            .map(str::to_string)
            .collect(),
        rate_limit_per_second: 60,
        rate_limit_burst: 20,
        google_api_key: Some(TEST_API_KEY.to_string()),
        gemini_model: TEST_MODEL.to_string(),
        gemini_base_url: Url::parse("http://127.0.0.1:9").unwrap(),
        godaddy_api_key: Some(TEST_GODADDY_KEY.to_string()),
        godaddy_api_secret: Some(TEST_GODADDY_SECRET.to_string()),
        godaddy_base_url: Url::parse("http://127.0.0.1:9").unwrap(),
        registrar_timeout_secs: None,
        max_suggestions: 10,
        max_candidates: 200,
        prompt_log_enabled: true,
        db_max_connections: 1,
        db_connect_timeout: 1,
        db_idle_timeout: 60,
        db_max_lifetime: 60,
    }
}

/// `generateContent` response carrying `text` as the only part.
pub fn gemini_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}

/// Bulk availability response marking `available` as free and the rest taken.
pub fn godaddy_response(checked: &[&str], available: &[&str]) -> Value {
    let domains: Vec<Value> = checked
        .iter()
        .map(|d| {
            json!({
                "domain": d,
                "available": available.contains(d),
                "definitive": false,
                "price": 11990000,
                "currency": "USD",
                "period": 1
            })
        })
        .collect();

    json!({ "domains": domains, "errors": [] })
}
