//! Request pipeline behavior: bearer token attachment, 401 handling,
//! error message mapping, and menu caching.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::json;
use yom_kitchen_client::{ApiClient, ApiError};
use yom_kitchen_core::Passcode;
use yom_kitchen_integration_tests::{serve, session};

fn passcode() -> Passcode {
    "1234".parse().unwrap()
}

// ============================================================================
// Bearer Token Attachment
// ============================================================================

#[tokio::test]
async fn test_bearer_token_attached_iff_present() {
    let captured: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));

    let record = Arc::clone(&captured);
    let app = Router::new().route(
        "/client/orders",
        get(move |headers: HeaderMap| {
            let record = Arc::clone(&record);
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                record.lock().unwrap().push(auth);
                Json(json!([]))
            }
        }),
    );
    let base = serve(app).await;

    let token: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let provider_token = Arc::clone(&token);
    let api = ApiClient::with_parts(
        &base,
        Arc::new(move || {
            provider_token
                .lock()
                .unwrap()
                .clone()
                .map(SecretString::from)
        }),
        Arc::new(|| {}),
    );

    // Without a token the request goes out unauthenticated, not blocked.
    api.orders_by_passcode(&passcode()).await.unwrap();

    *token.lock().unwrap() = Some("t0k3n".to_owned());
    api.orders_by_passcode(&passcode()).await.unwrap();

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0], None);
    assert_eq!(captured[1].as_deref(), Some("Bearer t0k3n"));
}

// ============================================================================
// 401 Handling
// ============================================================================

#[tokio::test]
async fn test_unauthorized_fires_handler_once_and_rejects() {
    let app = Router::new().route(
        "/client/orders",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "token expired"})),
            )
        }),
    );
    let base = serve(app).await;

    let fired = Arc::new(AtomicUsize::new(0));
    let handler_fired = Arc::clone(&fired);
    let api = ApiClient::with_parts(
        &base,
        Arc::new(|| Some(SecretString::from("stale"))),
        Arc::new(move || {
            handler_fired.fetch_add(1, Ordering::SeqCst);
        }),
    );

    let err = api.orders_by_passcode(&passcode()).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_default_handler_drops_stored_token() {
    let app = Router::new().route(
        "/client/orders",
        get(|| async { StatusCode::UNAUTHORIZED }),
    );
    let base = serve(app).await;

    let (api, tokens, _storage) = session(&base);
    tokens
        .store_login(&SecretString::from("stale"), "meseret")
        .unwrap();

    let err = api.orders_by_passcode(&passcode()).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    // The token is gone; the display username survives.
    assert!(tokens.token().is_none());
    assert_eq!(tokens.username().as_deref(), Some("meseret"));
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_server_error_message_is_surfaced() {
    let app = Router::new().route(
        "/client/orders",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid passcode"})),
            )
        }),
    );
    let base = serve(app).await;
    let (api, _tokens, _storage) = session(&base);

    let err = api.orders_by_passcode(&passcode()).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid passcode");
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_unparsable_success_body_is_a_decode_error() {
    let app = Router::new().route("/client/orders", get(|| async { "not json at all" }));
    let base = serve(app).await;
    let (api, _tokens, _storage) = session(&base);

    let err = api.orders_by_passcode(&passcode()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// ============================================================================
// Menu Caching
// ============================================================================

#[tokio::test]
async fn test_menu_is_cached_until_invalidated() {
    let hits = Arc::new(AtomicUsize::new(0));

    let handler_hits = Arc::clone(&hits);
    let app = Router::new().route(
        "/client/menus",
        get(move || {
            let handler_hits = Arc::clone(&handler_hits);
            async move {
                handler_hits.fetch_add(1, Ordering::SeqCst);
                Json(json!([{"id": 1, "name": "Injera", "price": 5.0}]))
            }
        }),
    );
    let base = serve(app).await;
    let (api, _tokens, _storage) = session(&base);

    let menu = api.menu().await.unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].name, "Injera");

    api.menu().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    api.invalidate_menu().await;
    api.menu().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
