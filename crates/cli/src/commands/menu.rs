//! Menu browsing.

use super::{CommandError, Context};

/// Print the available menu, grouped as the server orders it.
pub async fn list(ctx: &Context) -> Result<(), CommandError> {
    let menu = ctx.api.menu().await?;
    let available: Vec<_> = menu.iter().filter(|item| item.available).collect();

    if available.is_empty() {
        println!("The menu is empty right now.");
        return Ok(());
    }

    for item in available {
        let category = item.category.as_deref().unwrap_or("-");
        println!("{:>4}  {:<28} {:>8}  {category}", item.id, item.name, item.price.to_string());
        if let Some(desc) = &item.desc {
            println!("      {desc}");
        }
    }
    Ok(())
}
