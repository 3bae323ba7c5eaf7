//! API route configuration.

use crate::api::handlers::suggest_domains_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Public suggestion routes.
///
/// # Endpoints
///
/// - `POST /suggest-domains` - Up to ten available domains for an idea
pub fn suggest_routes() -> Router<AppState> {
    Router::new().route("/suggest-domains", post(suggest_domains_handler))
}
