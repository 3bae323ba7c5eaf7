//! Google Gemini implementation of [`SuggestionSource`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use url::Url;

use crate::domain::gateways::SuggestionSource;
use crate::error::AppError;
use crate::utils::candidate_parser::{CandidateParseError, parse_candidates};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Builds the single-turn prompt sent for an idea.
pub fn build_prompt(idea: &str, count: usize) -> String {
    format!(
        "Give me {count} short creative domain name ideas for a startup about '{idea}'. \
         Only return a clean comma-separated list like: ideaone.com, ideatwo.com..."
    )
}

/// Client for the Gemini `generateContent` API.
///
/// The API key is optional at construction so the service can start without
/// it; requests then fail with a configuration error.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: Url,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        http: Client,
        base_url: Url,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url,
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.as_str().trim_end_matches('/'),
            self.model
        )
    }

    /// Sends `prompt` and returns the concatenated text of the first candidate.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        let payload: GenerateContentResponse = response.json().await?;
        payload.into_text().ok_or(GeminiError::EmptyResponse)
    }
}

#[async_trait]
impl SuggestionSource for GeminiClient {
    fn ensure_configured(&self) -> Result<(), AppError> {
        match self.api_key {
            Some(_) => Ok(()),
            None => Err(GeminiError::MissingApiKey.into()),
        }
    }

    async fn suggest(&self, idea: &str, count: usize) -> Result<Vec<String>, AppError> {
        let text = self.generate(&build_prompt(idea, count)).await?;
        tracing::debug!(model = %self.model, response = %text, "Gemini response received");

        let candidates = parse_candidates(&text).map_err(GeminiError::from)?;
        Ok(candidates)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let texts: Vec<String> = content.parts.into_iter().filter_map(|p| p.text).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

/// Errors produced by the Gemini client.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Google AI Studio key not configured")]
    MissingApiKey,
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("response contained no text")]
    EmptyResponse,
    #[error(transparent)]
    Malformed(#[from] CandidateParseError),
}

impl From<GeminiError> for AppError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::MissingApiKey => AppError::configuration(
                GeminiError::MissingApiKey.to_string(),
                json!({ "upstream": "gemini" }),
            ),
            other => {
                tracing::error!(error = %other, "Gemini request failed");
                AppError::gateway("AI suggestion source error", json!({ "upstream": "gemini" }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(
            Client::new(),
            Url::parse("https://ai.example.test/v1beta/").unwrap(),
            "gemini-2.0-flash",
            api_key.map(str::to_string),
        )
    }

    #[test]
    fn test_build_prompt_embeds_idea_and_count() {
        let prompt = build_prompt("dog walking", 10);
        assert!(prompt.starts_with("Give me 10 short creative domain name ideas"));
        assert!(prompt.contains("'dog walking'"));
        assert!(prompt.contains("comma-separated"));
    }

    #[test]
    fn test_endpoint_joins_model() {
        assert_eq!(
            client(Some("k")).endpoint(),
            "https://ai.example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_ensure_configured() {
        assert!(client(Some("key")).ensure_configured().is_ok());
        assert!(matches!(
            client(None).ensure_configured(),
            Err(AppError::Configuration { .. })
        ));
        assert!(matches!(
            client(Some("  ")).ensure_configured(),
            Err(AppError::Configuration { .. })
        ));
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "a.com, " }, { "text": "b.com" }] },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        assert_eq!(payload.into_text().as_deref(), Some("a.com, b.com"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let payload: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();
        assert!(payload.into_text().is_none());
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            AppError::from(GeminiError::MissingApiKey),
            AppError::Configuration { .. }
        ));
        assert!(matches!(
            AppError::from(GeminiError::EmptyResponse),
            AppError::Gateway { .. }
        ));
    }
}
