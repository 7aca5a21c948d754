//! Checkout: submit the cart as an order.

use yom_kitchen_client::checkout;
use yom_kitchen_core::Passcode;

use super::{CommandError, Context};

/// Submit the current cart, clearing it on success.
pub async fn run(ctx: &Context, passcode: &str, notes: Option<String>) -> Result<(), CommandError> {
    let passcode: Passcode = passcode.parse()?;
    let mut cart = ctx.cart();

    match checkout::submit_order(&ctx.api, &mut cart, passcode, notes).await? {
        Some(order) => println!(
            "Order #{} placed. Status: {}. Total: {}.",
            order.id, order.status, order.total_amount
        ),
        None => println!("Order placed."),
    }
    Ok(())
}
