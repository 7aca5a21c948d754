//! Authenticated request pipeline and typed endpoint wrappers.
//!
//! [`ApiClient`] wraps `reqwest` with the two behaviors every Yom Kitchen
//! request shares:
//!
//! - a bearer token is attached if-and-only-if one is currently present
//!   (requests without a token are sent unauthenticated, never blocked);
//! - a 401 response fires the unauthorized handler exactly once, then the
//!   call rejects with [`ApiError::Unauthorized`] so the caller still
//!   observes the failure.
//!
//! The pipeline performs no retries and no backoff: exactly one request
//! attempt per call. Callers own retry affordances.
//!
//! Customer endpoints live here; admin endpoints are in [`admin`].

pub mod admin;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use yom_kitchen_core::Passcode;

use crate::auth::{TokenProvider, TokenStore};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{MenuItem, Order, OrderSubmission};

/// Side-effect hook fired on a 401 response.
///
/// In a browser this is where the redirect to the login page happens; the
/// default handler removes the stored token so the dead session is not
/// replayed.
pub type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

const MENU_CACHE_KEY: &str = "menu";
const MENU_CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Client for the Yom Kitchen REST API.
///
/// Cheaply cloneable; the menu listing is cached for five minutes, cart
/// and order operations are never cached.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    token_provider: TokenProvider,
    on_unauthorized: UnauthorizedHandler,
    menu_cache: Cache<String, Vec<MenuItem>>,
}

impl ApiClient {
    /// Create a client with the default token accessor and 401 handler,
    /// both backed by the given token store.
    #[must_use]
    pub fn new(config: &ClientConfig, tokens: &TokenStore) -> Self {
        let handler_tokens = tokens.clone();
        Self::with_parts(
            config.api_base_url.as_str(),
            tokens.provider(),
            Arc::new(move || {
                if let Err(e) = handler_tokens.clear_token() {
                    tracing::warn!("failed to clear rejected token: {e}");
                }
            }),
        )
    }

    /// Create a client from explicit parts.
    ///
    /// The token accessor and unauthorized handler are injectable so the
    /// pipeline is testable without a real storage backend or navigation.
    #[must_use]
    pub fn with_parts(
        base_url: &str,
        token_provider: TokenProvider,
        on_unauthorized: UnauthorizedHandler,
    ) -> Self {
        let menu_cache = Cache::builder()
            .max_capacity(8)
            .time_to_live(MENU_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_owned(),
                token_provider,
                on_unauthorized,
                menu_cache,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Build a request with the bearer token attached iff one is present.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.inner.http.request(method, self.endpoint(path));
        match (self.inner.token_provider)() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Execute a request and triage the response status.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            (self.inner.on_unauthorized)();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &body));
        }

        Ok(response)
    }

    /// Execute a request and deserialize a 2xx body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "failed to decode API response"
            );
            ApiError::Decode(e)
        })
    }

    // =========================================================================
    // Customer Endpoints
    // =========================================================================

    /// Get the current menu.
    ///
    /// Cached for five minutes; admin menu mutations invalidate the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        if let Some(menu) = self.inner.menu_cache.get(MENU_CACHE_KEY).await {
            debug!("cache hit for menu");
            return Ok(menu);
        }

        let menu: Vec<MenuItem> = self
            .send_json(self.request(Method::GET, "/client/menus"))
            .await?;

        self.inner
            .menu_cache
            .insert(MENU_CACHE_KEY.to_owned(), menu.clone())
            .await;

        Ok(menu)
    }

    /// Drop the cached menu.
    pub async fn invalidate_menu(&self) {
        self.inner.menu_cache.invalidate(MENU_CACHE_KEY).await;
    }

    /// Look up a customer's past orders by passcode.
    ///
    /// # Errors
    ///
    /// A wrong passcode surfaces as an application error with the server's
    /// message.
    #[instrument(skip(self, passcode))]
    pub async fn orders_by_passcode(&self, passcode: &Passcode) -> Result<Vec<Order>, ApiError> {
        let request = self
            .request(Method::GET, "/client/orders")
            .query(&[("client_password", passcode.as_str())]);
        self.send_json(request).await
    }

    /// Submit a checkout order.
    ///
    /// Returns the confirmation record when the server sends one; a 2xx
    /// with an empty or unrecognized body is still a success.
    ///
    /// # Errors
    ///
    /// Returns an error on any non-2xx outcome; the caller must not treat
    /// the order as placed.
    #[instrument(skip(self, submission), fields(lines = submission.order_items.len()))]
    pub async fn submit_order(
        &self,
        submission: &OrderSubmission,
    ) -> Result<Option<Order>, ApiError> {
        let request = self
            .request(Method::POST, "/client/orders")
            .json(submission);
        let response = self.send(request).await?;
        let body = response.text().await?;

        if body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&body) {
            Ok(order) => Ok(Some(order)),
            Err(e) => {
                debug!("order confirmation body not a full order record: {e}");
                Ok(None)
            }
        }
    }
}
