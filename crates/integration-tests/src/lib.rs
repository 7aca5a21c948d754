//! Integration tests for Yom Kitchen.
//!
//! The tests in `tests/` run against an in-process mock of the remote
//! API: an `axum` router bound to an ephemeral port on loopback. No
//! external server or credentials are needed; `cargo test` is enough.
//!
//! # Test Categories
//!
//! - `pipeline` - Bearer token attachment, 401 handling, error mapping,
//!   menu caching
//! - `checkout` - Order submission and its effect on the persisted cart
//! - `admin_api` - Login/logout, token verification, admin endpoints

use std::sync::Arc;

use axum::Router;
use yom_kitchen_client::{ApiClient, MemoryStorage, Storage, TokenStore};

/// Serve a router on an ephemeral loopback port, returning its base URL.
///
/// The server task runs for the remainder of the test process; tests are
/// short-lived enough that explicit shutdown is not worth the plumbing.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });

    format!("http://{addr}")
}

/// A memory-backed session wired the way production wires it: the token
/// provider reads the store, and the default 401 handler drops the token.
///
/// # Panics
///
/// The 401 handler panics on a storage failure, which `MemoryStorage`
/// does not produce.
#[must_use]
pub fn session(base_url: &str) -> (ApiClient, TokenStore, Arc<dyn Storage>) {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let tokens = TokenStore::new(Arc::clone(&storage));

    let handler_tokens = tokens.clone();
    let api = ApiClient::with_parts(
        base_url,
        tokens.provider(),
        Arc::new(move || {
            handler_tokens.clear_token().expect("clear token");
        }),
    );

    (api, tokens, storage)
}
