//! Core types for Yom Kitchen.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod passcode;
pub mod status;

pub use id::*;
pub use money::{Money, MoneyError};
pub use passcode::{Passcode, PasscodeError};
pub use status::OrderStatus;
