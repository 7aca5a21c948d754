//! Order submission and passcode order lookup.
//!
//! The one ordering rule that matters: the cart is cleared only after the
//! server confirms the order. Any failure leaves the cart (and its
//! persisted snapshot) exactly as it was, so the customer can retry.

use std::sync::Arc;

use thiserror::Error;
use tracing::{instrument, warn};
use yom_kitchen_core::Passcode;

use crate::api::ApiClient;
use crate::cart_store::CartStore;
use crate::error::ApiError;
use crate::models::{Order, OrderSubmission};
use crate::storage::{Storage, StorageError, keys};

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("the cart is empty")]
    EmptyCart,

    /// The submission request failed; the cart is untouched.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The order was accepted but the cleared cart could not be
    /// persisted; the stale snapshot would resurface on restart.
    #[error("order placed, but clearing the stored cart failed: {0}")]
    Storage(#[from] StorageError),
}

/// Submit the current cart as an order.
///
/// Builds the submission payload from the cart lines, posts it, and clears
/// the cart only once the server has accepted the order. Returns the
/// confirmation record when the server sent one.
///
/// # Errors
///
/// An empty cart, a failed request, or a failure to persist the cleared
/// cart. Only in the last case has the order actually been placed.
#[instrument(skip_all, fields(lines = cart.lines().len()))]
pub async fn submit_order(
    api: &ApiClient,
    cart: &mut CartStore,
    passcode: Passcode,
    notes: Option<String>,
) -> Result<Option<Order>, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let submission = OrderSubmission {
        passcode,
        order_items: cart.lines().to_vec(),
        notes,
    };

    let confirmation = api.submit_order(&submission).await?;
    cart.clear()?;
    Ok(confirmation)
}

/// Look up a customer's orders by passcode.
///
/// A successful result is mirrored to the `orderHistory` storage key so the
/// last lookup is available offline; a failure to mirror is logged and
/// ignored, the lookup itself still succeeds.
///
/// # Errors
///
/// A wrong passcode surfaces as an application error with the server's
/// message.
#[instrument(skip_all)]
pub async fn lookup_orders(
    api: &ApiClient,
    storage: &Arc<dyn Storage>,
    passcode: &Passcode,
) -> Result<Vec<Order>, ApiError> {
    let orders = api.orders_by_passcode(passcode).await?;

    match serde_json::to_string(&orders) {
        Ok(snapshot) => {
            if let Err(e) = storage.save(keys::ORDER_HISTORY, &snapshot) {
                warn!("failed to store order history: {e}");
            }
        }
        Err(e) => warn!("failed to serialize order history: {e}"),
    }

    Ok(orders)
}
