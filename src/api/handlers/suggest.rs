//! Handler for the domain suggestion endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::suggest::IdeaRequest;
use crate::domain::entities::NewPromptLog;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_info::ClientInfo;

/// Suggests up to ten available domain names for a startup idea.
///
/// # Endpoint
///
/// `POST /suggest-domains`
///
/// # Request Body
///
/// ```json
/// { "idea": "subscription box for specialty coffee" }
/// ```
///
/// # Response
///
/// ```json
/// ["brewbox.com", "beanly.io"]
/// ```
///
/// # Side Effects
///
/// On success the request is appended to the prompt log together with the
/// client IP and user agent. A failed log write is reported but does not fail
/// the request.
///
/// # Errors
///
/// - 400 Bad Request if the idea is shorter than five characters after trimming
/// - 500 Internal Server Error if upstream credentials are missing
/// - 502 Bad Gateway if the AI source or the registrar fails
pub async fn suggest_domains_handler(
    State(state): State<AppState>,
    client: ClientInfo,
    Json(payload): Json<IdeaRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    payload.validate()?;
    let idea = payload.trimmed_idea();

    let outcome = state.suggestion_service.suggest(idea).await?;

    let entry = NewPromptLog::new(
        Some(client.ip),
        Some(client.user_agent),
        idea,
        outcome.domains.clone(),
    );
    if let Err(e) = state.prompt_log_service.record(entry).await {
        tracing::error!(error = %e, "Failed to store prompt log entry");
    }

    Ok(Json(outcome.domains))
}
