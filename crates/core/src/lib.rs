//! Yom Kitchen Core - Shared types library.
//!
//! This crate provides common types used across all Yom Kitchen components:
//! - `client` - Session library (cart store, API pipeline, checkout)
//! - `cli` - Command-line ordering client
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no storage backends. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, passcodes, and
//!   order statuses
//! - [`cart`] - The in-session cart value type and its mutation rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartLine, LineInput};
pub use types::*;
