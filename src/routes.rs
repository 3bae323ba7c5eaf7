//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /suggest-domains` - Domain suggestions (rate limited)
//! - `GET  /health`          - Health check: database and upstream configuration
//! - `GET  /metrics`         - Prometheus scrape endpoint
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Credentialed access for configured origins only
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, metrics_handler};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// When `config.behind_proxy` is set, rate limiting reads the client IP from
/// forwarding headers instead of the peer socket address; enable it only
/// when the service runs behind a trusted reverse proxy.
///
/// # Errors
///
/// Returns an error if the CORS origins or rate limits are invalid.
pub fn app_router(
    state: AppState,
    metrics: PrometheusHandle,
    config: &Config,
) -> Result<NormalizePath<Router>> {
    let suggest_router = if config.behind_proxy {
        api::routes::suggest_routes().layer(rate_limit::proxy_layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        )?)
    } else {
        api::routes::suggest_routes().layer(rate_limit::layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        )?)
    };

    let router = Router::new()
        .merge(suggest_router)
        .route("/health", get(health_handler))
        .with_state(state)
        .merge(
            Router::new()
                .route("/metrics", get(metrics_handler))
                .with_state(metrics),
        )
        .layer(cors::layer(&config.cors_allowed_origins)?)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
