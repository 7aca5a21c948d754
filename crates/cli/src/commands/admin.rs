//! Admin dashboard commands.
//!
//! All of these except `login` ride on the stored bearer token; a 401
//! drops the token, so the next step after "session expired" is always
//! `yom admin login`.

use yom_kitchen_core::{OrderId, OrderStatus};

use super::{CommandError, Context};

/// Log in and persist the session.
pub async fn login(ctx: &Context, username: &str, password: &str) -> Result<(), CommandError> {
    ctx.api.login(&ctx.tokens, username, password).await?;
    println!("Logged in as {username}.");
    Ok(())
}

/// Log out, removing the stored token and username.
pub fn logout(ctx: &Context) -> Result<(), CommandError> {
    ctx.tokens.clear()?;
    println!("Logged out.");
    Ok(())
}

/// Check whether the stored session is still accepted by the server.
pub async fn verify(ctx: &Context) -> Result<(), CommandError> {
    if ctx.api.verify_token().await? {
        match ctx.tokens.username() {
            Some(username) => println!("Session is valid (logged in as {username})."),
            None => println!("Session is valid."),
        }
    } else {
        // The 401 path already dropped the token; a 403 has not.
        ctx.tokens.clear_token()?;
        println!("Session expired. Log in again with `yom admin login`.");
    }
    Ok(())
}

/// Print the dashboard statistics summary.
pub async fn stats(ctx: &Context) -> Result<(), CommandError> {
    let stats = ctx.api.stats().await?;

    println!("Orders:         {}", stats.total_orders);
    println!("Pending:        {}", stats.pending_orders);
    println!("Revenue today:  {}", stats.revenue_today);
    println!("Clients:        {}", stats.total_clients);
    println!("Menu items:     {}", stats.total_menus);

    if !stats.orders_by_status.is_empty() {
        println!("By status:");
        for bucket in &stats.orders_by_status {
            println!("  {:<10} {}", bucket.status.to_string(), bucket.count);
        }
    }
    Ok(())
}

/// List all orders across clients.
pub async fn orders(ctx: &Context) -> Result<(), CommandError> {
    let orders = ctx.api.admin_orders().await?;

    if orders.is_empty() {
        println!("No orders.");
        return Ok(());
    }

    for order in orders {
        println!(
            "#{:<5} {}  {:<10} {:<20} {:>8}",
            order.id,
            order.order_date.format("%Y-%m-%d %H:%M"),
            order.status.to_string(),
            order.client.name,
            order.total_amount.to_string()
        );
    }
    Ok(())
}

/// Move an order to a new status.
pub async fn set_status(ctx: &Context, id: i32, status: &str) -> Result<(), CommandError> {
    let status: OrderStatus = status
        .parse()
        .map_err(|_| CommandError::InvalidStatus(status.to_owned()))?;

    ctx.api.update_order_status(OrderId::new(id), status).await?;
    println!("Order #{id} is now {status}.");
    Ok(())
}
