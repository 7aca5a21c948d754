//! Passcode order lookup.

use yom_kitchen_client::checkout;
use yom_kitchen_core::Passcode;

use super::{CommandError, Context};

/// Look up and print a customer's past orders.
pub async fn lookup(ctx: &Context, passcode: &str) -> Result<(), CommandError> {
    let passcode: Passcode = passcode.parse()?;
    let orders = checkout::lookup_orders(&ctx.api, &ctx.storage, &passcode).await?;

    if orders.is_empty() {
        println!("No orders found.");
        return Ok(());
    }

    for order in orders {
        println!(
            "#{:<5} {}  {:<10} {:>8}",
            order.id,
            order.order_date.format("%Y-%m-%d %H:%M"),
            order.status.to_string(),
            order.total_amount.to_string()
        );
        for line in &order.order_items {
            println!("       {} x {}", line.quantity, line.item_name);
        }
        if let Some(notes) = &order.notes {
            println!("       note: {notes}");
        }
    }
    Ok(())
}
