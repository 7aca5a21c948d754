//! Admin dashboard endpoints.
//!
//! Everything here requires a bearer token except [`ApiClient::login`];
//! the shared pipeline in the parent module attaches it.

use reqwest::{Method, StatusCode};
use secrecy::SecretString;
use serde_json::json;
use tracing::instrument;
use yom_kitchen_core::{ClientId, MenuItemId, OrderId, OrderStatus, UserId};

use super::ApiClient;
use crate::auth::TokenStore;
use crate::error::ApiError;
use crate::models::{
    Client, DashboardStats, LoginRequest, LoginResponse, MenuItem, NewClient, NewMenuItem,
    NewOrder, NewUser, Order, User,
};

impl ApiClient {
    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for a bearer token and persist it in the
    /// token store together with the username.
    ///
    /// # Errors
    ///
    /// Bad credentials surface as an application error with the server's
    /// message; a storage failure after a successful exchange is also an
    /// error since the session would be lost on restart.
    #[instrument(skip(self, tokens, password))]
    pub async fn login(
        &self,
        tokens: &TokenStore,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let request = self
            .request(Method::POST, "/admin/auth/login")
            .json(&LoginRequest {
                username: username.to_owned(),
                password: password.to_owned(),
            });
        let response: LoginResponse = self.send_json(request).await?;

        tokens.store_login(&SecretString::from(response.token), username)?;
        Ok(())
    }

    /// Check whether the stored token is still accepted by the server.
    ///
    /// Returns `Ok(false)` on a 401 or 403; the 401 path also fires the
    /// unauthorized handler, which by default drops the stored token.
    ///
    /// # Errors
    ///
    /// Transport failures and unrelated error statuses propagate.
    #[instrument(skip(self))]
    pub async fn verify_token(&self) -> Result<bool, ApiError> {
        let request = self.request(Method::POST, "/admin/auth/verify-token");
        match self.send(request).await {
            Ok(_) => Ok(true),
            Err(ApiError::Unauthorized) => Ok(false),
            Err(ApiError::Api { status, .. }) if status == StatusCode::FORBIDDEN => Ok(false),
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Clients
    // =========================================================================

    /// List all registered clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn clients(&self) -> Result<Vec<Client>, ApiError> {
        self.send_json(self.request(Method::GET, "/admin/clients"))
            .await
    }

    /// Get one client by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn client(&self, id: ClientId) -> Result<Client, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/admin/clients/{id}")))
            .await
    }

    /// Register a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self, client), fields(name = %client.name))]
    pub async fn create_client(&self, client: &NewClient) -> Result<Client, ApiError> {
        self.send_json(self.request(Method::POST, "/admin/clients").json(client))
            .await
    }

    /// Update an existing client.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self, client))]
    pub async fn update_client(&self, id: ClientId, client: &NewClient) -> Result<Client, ApiError> {
        self.send_json(
            self.request(Method::PUT, &format!("/admin/clients/{id}"))
                .json(client),
        )
        .await
    }

    /// Delete a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_client(&self, id: ClientId) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("/admin/clients/{id}")))
            .await?;
        Ok(())
    }

    // =========================================================================
    // Menu Items
    // =========================================================================

    /// Get one menu item by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn menu_item(&self, id: MenuItemId) -> Result<MenuItem, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/admin/menus/{id}")))
            .await
    }

    /// Add a menu item. Invalidates the cached menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self, item), fields(name = %item.name))]
    pub async fn create_menu_item(&self, item: &NewMenuItem) -> Result<MenuItem, ApiError> {
        let created = self
            .send_json(self.request(Method::POST, "/admin/menus").json(item))
            .await?;
        self.invalidate_menu().await;
        Ok(created)
    }

    /// Update a menu item. Invalidates the cached menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self, item))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        item: &NewMenuItem,
    ) -> Result<MenuItem, ApiError> {
        let updated = self
            .send_json(
                self.request(Method::PUT, &format!("/admin/menus/{id}"))
                    .json(item),
            )
            .await?;
        self.invalidate_menu().await;
        Ok(updated)
    }

    /// Delete a menu item. Invalidates the cached menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_menu_item(&self, id: MenuItemId) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("/admin/menus/{id}")))
            .await?;
        self.invalidate_menu().await;
        Ok(())
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// List dashboard users.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.send_json(self.request(Method::GET, "/admin/users"))
            .await
    }

    /// Create a dashboard user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.send_json(self.request(Method::POST, "/admin/users").json(user))
            .await
    }

    /// Update a dashboard user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self, user))]
    pub async fn update_user(&self, id: UserId, user: &NewUser) -> Result<User, ApiError> {
        self.send_json(
            self.request(Method::PUT, &format!("/admin/users/{id}"))
                .json(user),
        )
        .await
    }

    /// Delete a dashboard user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("/admin/users/{id}")))
            .await?;
        Ok(())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// List all orders across clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn admin_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.send_json(self.request(Method::GET, "/admin/orders"))
            .await
    }

    /// Create an order on a client's behalf.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self, order), fields(client_id = %order.client_id))]
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.send_json(self.request(Method::POST, "/admin/orders").json(order))
            .await
    }

    /// Move an order to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        self.send(
            self.request(Method::PATCH, &format!("/admin/orders/{id}/status"))
                .json(&json!({ "status": status })),
        )
        .await?;
        Ok(())
    }

    // =========================================================================
    // Stats
    // =========================================================================

    /// Fetch the dashboard statistics summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.send_json(self.request(Method::GET, "/admin/stats"))
            .await
    }
}
