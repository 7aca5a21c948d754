//! Wire shapes for the Yom Kitchen REST API.
//!
//! The source frontend carried several divergent variants of these shapes;
//! the structs here are the canonical ones (the later, complete variants),
//! validated on receipt from the network.

pub mod client;
pub mod menu;
pub mod order;
pub mod stats;
pub mod user;

pub use client::{Client, NewClient};
pub use menu::{MenuItem, NewMenuItem};
pub use order::{NewOrder, Order, OrderSubmission};
pub use stats::{DashboardStats, StatusCount};
pub use user::{LoginRequest, LoginResponse, NewUser, User};
