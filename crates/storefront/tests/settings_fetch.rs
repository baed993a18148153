//! Integration tests for the one-shot settings fetch.
//!
//! Each test spins up a local axum server on an ephemeral port standing in
//! for the backend API, so no external services are required.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use tower::util::ServiceExt;

use papaya_storefront::config::StorefrontConfig;
use papaya_storefront::services::{SettingsClient, SettingsState, SettingsStore};
use papaya_storefront::state::AppState;

/// Serve `router` on an ephemeral port and return the API base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn settings_body() -> serde_json::Value {
    serde_json::json!({
        "contactInfo": { "whatsapp": "+54 9 11 1234-5678" },
        "shopName": "Papaya"
    })
}

async fn backend_with_settings() -> String {
    spawn_backend(Router::new().route(
        "/api/settings",
        get(|| async { Json(settings_body()) }),
    ))
    .await
}

fn config_for(base_api_url: &str) -> StorefrontConfig {
    StorefrontConfig {
        api_base_url: base_api_url.to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

#[tokio::test]
async fn fetch_deserializes_settings() {
    let base = backend_with_settings().await;

    let settings = SettingsClient::new(&base).fetch().await.unwrap();

    assert_eq!(
        settings.contact_info.whatsapp.as_deref(),
        Some("+54 9 11 1234-5678")
    );
    assert_eq!(settings.extra.get("shopName").unwrap(), "Papaya");
}

#[tokio::test]
async fn successful_load_transitions_to_loaded() {
    let base = backend_with_settings().await;
    let client = SettingsClient::new(&base);
    let store = SettingsStore::new();

    assert!(store.is_loading().await);
    store.load(&client).await;

    assert!(!store.is_loading().await);
    assert!(matches!(
        store.snapshot().await,
        SettingsState::Loaded(_)
    ));
    assert!(store.settings().await.is_some());
}

#[tokio::test]
async fn server_error_transitions_to_unavailable() {
    let base = spawn_backend(Router::new().route(
        "/api/settings",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;
    let store = SettingsStore::new();

    store.load(&SettingsClient::new(&base)).await;

    assert!(!store.is_loading().await);
    assert!(matches!(
        store.snapshot().await,
        SettingsState::Unavailable
    ));
    assert!(store.settings().await.is_none());
}

#[tokio::test]
async fn malformed_body_transitions_to_unavailable() {
    let base = spawn_backend(Router::new().route(
        "/api/settings",
        get(|| async { "not json at all" }),
    ))
    .await;
    let store = SettingsStore::new();

    store.load(&SettingsClient::new(&base)).await;

    assert!(matches!(
        store.snapshot().await,
        SettingsState::Unavailable
    ));
}

#[tokio::test]
async fn load_is_fetch_once() {
    let good = backend_with_settings().await;
    let bad = spawn_backend(Router::new().route(
        "/api/settings",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;
    let store = SettingsStore::new();

    store.load(&SettingsClient::new(&good)).await;
    // A second load must be a no-op, even against a failing backend.
    store.load(&SettingsClient::new(&bad)).await;

    assert!(store.settings().await.is_some());
}

#[tokio::test]
async fn contact_route_serves_deep_link_after_load() {
    let base = backend_with_settings().await;
    let state = AppState::new(config_for(&base));
    state.load_settings().await;

    let app = papaya_storefront::routes::routes().with_state(state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/contact/whatsapp?text=Hola")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        json.get("url").unwrap(),
        "https://wa.me/5491112345678?text=Hola"
    );
}

#[tokio::test]
async fn contact_route_renders_nothing_when_settings_unavailable() {
    let base = spawn_backend(Router::new().route(
        "/api/settings",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;
    let state = AppState::new(config_for(&base));
    state.load_settings().await;

    let app = papaya_storefront::routes::routes().with_state(state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/contact/whatsapp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn contact_route_renders_nothing_without_whatsapp_number() {
    let base = spawn_backend(Router::new().route(
        "/api/settings",
        get(|| async { Json(serde_json::json!({ "contactInfo": {} })) }),
    ))
    .await;
    let state = AppState::new(config_for(&base));
    state.load_settings().await;

    let app = papaya_storefront::routes::routes().with_state(state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/contact/whatsapp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
