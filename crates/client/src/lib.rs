//! Yom Kitchen session library.
//!
//! This crate is the client-side core of the Yom Kitchen ordering
//! application: everything a UI (web page, CLI, kiosk) needs to browse the
//! menu, build up an order, and submit it, plus the authenticated pipeline
//! the admin dashboard rides on.
//!
//! # Modules
//!
//! - [`storage`] - Injected durable key-value storage port
//! - [`cart_store`] - The persisted cart (mutations + derived totals)
//! - [`auth`] - Bearer-token store backed by durable storage
//! - [`api`] - Authenticated request pipeline and typed endpoint wrappers
//! - [`checkout`] - Order submission and passcode order lookup flows
//! - [`models`] - Wire shapes for menu items, clients, orders, and users
//! - [`config`] - Environment-based configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod cart_store;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use api::ApiClient;
pub use auth::TokenStore;
pub use cart_store::CartStore;
pub use checkout::CheckoutError;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
