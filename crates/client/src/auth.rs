//! Bearer token store backed by durable storage.
//!
//! Lifecycle of the token: written together with the username on successful
//! admin login, read before every outgoing request, removed on logout, and
//! removed when the server rejects it (the pipeline's default 401 handler
//! calls [`TokenStore::clear_token`]).

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::storage::{Storage, StorageError, keys};

/// Pluggable token accessor for the request pipeline.
///
/// The default implementation reads from durable storage; tests supply a
/// closure instead.
pub type TokenProvider = Arc<dyn Fn() -> Option<SecretString> + Send + Sync>;

/// Owns the `admin_jwt_token` and `username` storage keys.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn Storage>,
}

impl TokenStore {
    /// Create a token store over the given storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// The current bearer token, if a session is logged in.
    ///
    /// A failing storage read is treated as "no token": requests then go
    /// out unauthenticated rather than not at all.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        match self.storage.load(keys::ADMIN_TOKEN) {
            Ok(value) => value.map(SecretString::from),
            Err(e) => {
                tracing::warn!("failed to read stored token: {e}");
                None
            }
        }
    }

    /// The logged-in username, if any. Display-only.
    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.storage.load(keys::USERNAME).ok().flatten()
    }

    /// Persist a successful login.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn store_login(&self, token: &SecretString, username: &str) -> Result<(), StorageError> {
        self.storage.save(keys::ADMIN_TOKEN, token.expose_secret())?;
        self.storage.save(keys::USERNAME, username)
    }

    /// Log out: remove both the token and the username.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(keys::ADMIN_TOKEN)?;
        self.storage.remove(keys::USERNAME)
    }

    /// Remove only the token, keeping the display username.
    ///
    /// This is the 401 path: the session is invalid but the UI may still
    /// show who was logged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn clear_token(&self) -> Result<(), StorageError> {
        self.storage.remove(keys::ADMIN_TOKEN)
    }

    /// A [`TokenProvider`] reading from this store.
    #[must_use]
    pub fn provider(&self) -> TokenProvider {
        let store = self.clone();
        Arc::new(move || store.token())
    }
}
