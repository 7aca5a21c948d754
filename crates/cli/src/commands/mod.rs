//! Command implementations and the shared session context.

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod menu;
pub mod orders;

use std::sync::Arc;

use thiserror::Error;
use yom_kitchen_client::checkout::CheckoutError;
use yom_kitchen_client::config::ConfigError;
use yom_kitchen_client::{
    ApiClient, ApiError, CartStore, ClientConfig, FileStorage, Storage, StorageError, TokenStore,
};
use yom_kitchen_core::PasscodeError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("invalid passcode: {0}")]
    Passcode(#[from] PasscodeError),

    /// The menu has no available item with this id.
    #[error("no available menu item with id {0}")]
    UnknownMenuItem(i32),

    /// Not one of the known order statuses.
    #[error("invalid status: {0}. Valid statuses: Pending, Accepted, Ready, Delivered, Cancelled")]
    InvalidStatus(String),
}

/// Everything a command needs: durable session storage and an API client
/// wired to the stored token.
pub struct Context {
    pub api: ApiClient,
    pub tokens: TokenStore,
    pub storage: Arc<dyn Storage>,
}

impl Context {
    /// Build the session context from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is missing or the profile
    /// directory cannot be opened.
    pub fn from_env() -> Result<Self, CommandError> {
        let config = ClientConfig::from_env()?;
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(&config.storage_dir)?);
        let tokens = TokenStore::new(Arc::clone(&storage));
        let api = ApiClient::new(&config, &tokens);

        Ok(Self {
            api,
            tokens,
            storage,
        })
    }

    /// Open the persisted cart.
    #[must_use]
    pub fn cart(&self) -> CartStore {
        CartStore::open(Arc::clone(&self.storage))
    }
}
