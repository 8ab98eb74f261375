use axum::http::{HeaderName, HeaderValue};
use ethiens_config::EnvConfig;
use serde_json::Value;

mod common;

use common::{Upstreams, server_from_env};

#[tokio::test]
async fn ping_reports_primary_provider_state() {
    let upstreams = Upstreams::start().await;

    let configured: Value = upstreams.server(true).get("/ping").await.json();
    assert_eq!(configured["status"], "ok");
    assert_eq!(configured["primary_provider"], true);
    assert_eq!(configured["version"], env!("CARGO_PKG_VERSION"));
    assert!(configured["timestamp"].is_string());

    let fallback_only: Value = upstreams.server(false).get("/ping").await.json();
    assert_eq!(fallback_only["primary_provider"], false);
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let upstreams = Upstreams::start().await;

    let response = upstreams
        .server(false)
        .get("/ping")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://front.ethiens.fr"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("*"))
    );
}

#[tokio::test]
async fn cors_echoes_configured_origin_only() {
    let upstreams = Upstreams::start().await;
    let server = server_from_env(EnvConfig {
        cors_allowed_origins: Some(vec!["https://front.ethiens.fr".into()]),
        ..upstreams.env(false)
    });

    let allowed = server
        .get("/ping")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://front.ethiens.fr"),
        )
        .await;
    assert_eq!(
        allowed.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("https://front.ethiens.fr"))
    );

    let denied = server
        .get("/ping")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://elsewhere.example"),
        )
        .await;
    assert!(
        denied
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
