//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: `SELECT 1` round-trip
/// 2. **AI source**: Gemini API key present
/// 3. **Registrar**: GoDaddy credentials present
///
/// Upstream checks only inspect configuration; no request is sent to either API.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;

    let ai_source = match state.suggestion_service.ensure_source_configured() {
        Ok(()) => CheckStatus::ok("Configured"),
        Err(e) => CheckStatus::error(e.to_string()),
    };

    let registrar = match state.suggestion_service.ensure_oracle_configured() {
        Ok(()) => CheckStatus::ok("Configured"),
        Err(e) => CheckStatus::error(e.to_string()),
    };

    let all_healthy = database.is_ok() && ai_source.is_ok() && registrar.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            ai_source,
            registrar,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.prompt_log_service.health_check().await {
        Ok(()) => CheckStatus::ok("Connected"),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}
