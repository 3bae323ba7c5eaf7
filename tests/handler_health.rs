mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use common::{InMemoryPromptLogRepository, Upstreams, create_test_state};
use domainly::api::handlers::health_handler;
use domainly::state::AppState;
use serde_json::Value;
use std::sync::Arc;
use wiremock::MockServer;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let upstream = MockServer::start().await;
    let server = test_server(create_test_state(
        Upstreams::configured(&upstream),
        Arc::new(InMemoryPromptLogRepository::default()),
        true,
    ));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["ai_source"]["status"], "ok");
    assert_eq!(json["checks"]["registrar"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let upstream = MockServer::start().await;
    let server = test_server(create_test_state(
        Upstreams::configured(&upstream),
        Arc::new(InMemoryPromptLogRepository::default()),
        true,
    ));

    let response = server.get("/health").await;

    let json = response.json::<Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("ai_source").is_some());
    assert!(json["checks"].get("registrar").is_some());
}

#[tokio::test]
async fn test_health_degraded_without_registrar_credentials() {
    let upstream = MockServer::start().await;
    let server = test_server(create_test_state(
        Upstreams {
            server: &upstream,
            api_key: Some(common::TEST_API_KEY),
            registrar_credentials: false,
        },
        Arc::new(InMemoryPromptLogRepository::default()),
        true,
    ));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["ai_source"]["status"], "ok");
    assert_eq!(json["checks"]["registrar"]["status"], "error");
    assert_eq!(
        json["checks"]["registrar"]["message"],
        "GoDaddy API credentials missing"
    );
}

#[tokio::test]
async fn test_health_degraded_when_database_fails() {
    let upstream = MockServer::start().await;
    let server = test_server(create_test_state(
        Upstreams::configured(&upstream),
        Arc::new(InMemoryPromptLogRepository::failing()),
        true,
    ));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["checks"]["database"]["status"], "error");
}
