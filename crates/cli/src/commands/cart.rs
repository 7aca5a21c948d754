//! Cart management: the persisted in-progress order.

use yom_kitchen_core::MenuItemId;

use super::{CommandError, Context};

/// Print the cart contents and derived totals.
pub fn show(ctx: &Context) -> Result<(), CommandError> {
    let cart = ctx.cart();

    if cart.is_empty() {
        println!("The cart is empty.");
        return Ok(());
    }

    for line in cart.lines() {
        println!(
            "{:>3} x {:<28} {:>8}  ({} each)",
            line.quantity,
            line.item_name,
            line.subtotal.to_string(),
            line.unit_price
        );
    }
    println!("{} items, total {}", cart.total_items(), cart.total_price());
    Ok(())
}

/// Add a menu item to the cart, capturing its current name and price.
pub async fn add(ctx: &Context, id: i32, quantity: u32) -> Result<(), CommandError> {
    let id = MenuItemId::new(id);
    let menu = ctx.api.menu().await?;
    let item = menu
        .iter()
        .find(|item| item.id == id && item.available)
        .ok_or(CommandError::UnknownMenuItem(id.as_i32()))?;

    let mut cart = ctx.cart();
    cart.add(item.to_line(quantity))?;

    println!("Added {quantity} x {}.", item.name);
    println!("{} items, total {}", cart.total_items(), cart.total_price());
    Ok(())
}

/// Remove one unit of a menu item.
pub fn remove(ctx: &Context, id: i32) -> Result<(), CommandError> {
    let mut cart = ctx.cart();
    cart.remove_one(MenuItemId::new(id))?;
    println!("{} items, total {}", cart.total_items(), cart.total_price());
    Ok(())
}

/// Increase a line's quantity by one.
pub fn increase(ctx: &Context, id: i32) -> Result<(), CommandError> {
    let mut cart = ctx.cart();
    cart.increase(MenuItemId::new(id))?;
    println!("{} items, total {}", cart.total_items(), cart.total_price());
    Ok(())
}

/// Decrease a line's quantity by one, removing the line at zero.
pub fn decrease(ctx: &Context, id: i32) -> Result<(), CommandError> {
    let mut cart = ctx.cart();
    cart.decrease(MenuItemId::new(id))?;
    println!("{} items, total {}", cart.total_items(), cart.total_price());
    Ok(())
}

/// Empty the cart.
pub fn clear(ctx: &Context) -> Result<(), CommandError> {
    let mut cart = ctx.cart();
    cart.clear()?;
    println!("Cart cleared.");
    Ok(())
}
