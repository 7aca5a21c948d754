//! Yom Kitchen CLI - menu browsing, cart management, and checkout.
//!
//! # Usage
//!
//! ```bash
//! # Browse the menu
//! yom menu
//!
//! # Build up an order
//! yom cart add 3 --quantity 2
//! yom cart show
//!
//! # Submit it
//! yom checkout --passcode 1234 --notes "no berbere"
//!
//! # Look up past orders
//! yom orders --passcode 1234
//!
//! # Admin dashboard
//! yom admin login -u meseret -p hunter2
//! yom admin stats
//! yom admin set-status 7 Ready
//! ```
//!
//! Configuration comes from the environment (or a `.env` file):
//! `YOM_API_BASE_URL` for the API, `YOM_STORAGE_DIR` for the session
//! profile directory.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Command output goes to stdout; diagnostics go through tracing.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "yom")]
#[command(author, version, about = "Yom Kitchen ordering CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current menu
    Menu,
    /// Manage the in-progress order
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Submit the cart as an order
    Checkout {
        /// Customer passcode
        #[arg(short, long)]
        passcode: String,

        /// Optional note for the kitchen
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Look up past orders by passcode
    Orders {
        /// Customer passcode
        #[arg(short, long)]
        passcode: String,
    },
    /// Admin dashboard commands
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add a menu item to the cart
    Add {
        /// Menu item id
        id: i32,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove one unit of a menu item
    Remove {
        /// Menu item id
        id: i32,
    },
    /// Increase a line's quantity by one
    Increase {
        /// Menu item id
        id: i32,
    },
    /// Decrease a line's quantity by one
    Decrease {
        /// Menu item id
        id: i32,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Log in to the admin dashboard
    Login {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
    /// Log out, removing the stored session
    Logout,
    /// Check whether the stored session is still valid
    Verify,
    /// Show dashboard statistics
    Stats,
    /// List all orders across clients
    Orders,
    /// Move an order to a new status
    SetStatus {
        /// Order id
        id: i32,

        /// New status (Pending, Accepted, Ready, Delivered, Cancelled)
        status: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let ctx = Context::from_env()?;

    match cli.command {
        Commands::Menu => commands::menu::list(&ctx).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&ctx)?,
            CartAction::Add { id, quantity } => commands::cart::add(&ctx, id, quantity).await?,
            CartAction::Remove { id } => commands::cart::remove(&ctx, id)?,
            CartAction::Increase { id } => commands::cart::increase(&ctx, id)?,
            CartAction::Decrease { id } => commands::cart::decrease(&ctx, id)?,
            CartAction::Clear => commands::cart::clear(&ctx)?,
        },
        Commands::Checkout { passcode, notes } => {
            commands::checkout::run(&ctx, &passcode, notes).await?;
        }
        Commands::Orders { passcode } => commands::orders::lookup(&ctx, &passcode).await?,
        Commands::Admin { action } => match action {
            AdminAction::Login { username, password } => {
                commands::admin::login(&ctx, &username, &password).await?;
            }
            AdminAction::Logout => commands::admin::logout(&ctx)?,
            AdminAction::Verify => commands::admin::verify(&ctx).await?,
            AdminAction::Stats => commands::admin::stats(&ctx).await?,
            AdminAction::Orders => commands::admin::orders(&ctx).await?,
            AdminAction::SetStatus { id, status } => {
                commands::admin::set_status(&ctx, id, &status).await?;
            }
        },
    }
    Ok(())
}
