//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, upstream clients, and the Axum
//! server lifecycle.

use crate::application::services::{
    DynPromptLogService, DynSuggestionService, PromptLogService, SuggestionService,
};
use crate::config::Config;
use crate::domain::repositories::PromptLogRepository;
use crate::infrastructure::gateways::build_gateways;
use crate::infrastructure::persistence::PgPromptLogRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::telemetry;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the connection pool using the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Wires services from configuration and an open pool.
///
/// # Errors
///
/// Returns an error if the HTTP client for the upstreams cannot be built.
pub fn build_state(config: &Config, pool: PgPool) -> Result<AppState> {
    let (source, oracle) = build_gateways(config)?;
    let suggestion_service: Arc<DynSuggestionService> = Arc::new(SuggestionService::new(
        source,
        oracle,
        config.suggestion_policy(),
    ));

    let repository: Arc<dyn PromptLogRepository> =
        Arc::new(PgPromptLogRepository::new(Arc::new(pool)));
    let prompt_log_service: Arc<DynPromptLogService> = Arc::new(PromptLogService::new(
        repository,
        config.prompt_log_enabled,
    ));

    Ok(AppState::new(suggestion_service, prompt_log_service))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations (creates `prompt_log` if absent)
/// - Gemini and GoDaddy clients
/// - Prometheus metrics recorder
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let state = build_state(&config, pool)?;
    if let Err(e) = state.suggestion_service.ensure_configured() {
        tracing::warn!("{}; /suggest-domains will fail until it is configured", e);
    }

    let metrics = telemetry::init_metrics()?;
    let app = app_router(state, metrics, &config)?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
