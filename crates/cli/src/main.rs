//! Atelier CLI - browse the catalog, manage the cart and wishlist, check out.
//!
//! # Usage
//!
//! ```bash
//! # Browse
//! atelier products --category women --sort price-low-high
//! atelier product 3
//! atelier search linen
//!
//! # Shop
//! atelier cart add 3 --size M --quantity 2
//! atelier wishlist toggle 7
//! atelier login --email ada@example.com --password secret
//! atelier checkout --full-name "Ada Lovelace" --street "12 Main St" \
//!     --city Springfield --state IL --postal-code 62701 --paypal
//! ```
//!
//! State lives in `ATELIER_DATA_DIR` (default `.atelier`). See
//! `atelier_storefront::config` for the other environment variables.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_storefront::Storefront;
use atelier_storefront::config::StorefrontConfig;

mod commands;

use commands::CommandError;
use commands::catalog::ListingArgs;
use commands::checkout::CheckoutArgs;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about = "Atelier storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with optional filters
    Products(ListingArgs),
    /// Show a product and related items
    Product {
        /// Product ID
        id: String,
    },
    /// Search products by name, description or category
    Search {
        /// Search text
        query: String,
    },
    /// List categories and available sizes
    Categories,
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign in
    Signup {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show who is signed in
    Whoami,
    /// Place an order for the cart
    Checkout(CheckoutArgs),
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add a product
    Add {
        /// Product ID
        id: String,

        /// Size (defaults to the product's first size)
        #[arg(short, long)]
        size: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product in one size
    Remove {
        /// Product ID
        id: String,

        #[arg(short, long)]
        size: String,
    },
    /// Set the quantity of a line (0 removes it)
    Update {
        /// Product ID
        id: String,

        #[arg(short, long)]
        size: String,

        #[arg(short, long)]
        quantity: u32,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show saved products
    Show,
    /// Save a product
    Add {
        /// Product ID
        id: String,
    },
    /// Remove a saved product
    Remove {
        /// Product ID
        id: String,
    },
    /// Save a product, or remove it if already saved
    Toggle {
        /// Product ID
        id: String,
    },
    /// Remove every saved product
    Clear,
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "atelier_storefront=info,atelier_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let mut storefront = Storefront::open(config)?;

    match cli.command {
        Commands::Products(args) => commands::catalog::list(&storefront, args)?,
        Commands::Product { id } => commands::catalog::show(&storefront, &id)?,
        Commands::Search { query } => commands::catalog::search(&storefront, &query),
        Commands::Categories => commands::catalog::categories(&storefront),
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&storefront),
            CartAction::Add { id, size, quantity } => {
                commands::cart::add(&mut storefront, &id, size.as_deref(), quantity)?;
            }
            CartAction::Remove { id, size } => commands::cart::remove(&mut storefront, &id, &size),
            CartAction::Update { id, size, quantity } => {
                commands::cart::update(&mut storefront, &id, &size, quantity);
            }
            CartAction::Clear => commands::cart::clear(&mut storefront),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show(&storefront),
            WishlistAction::Add { id } => commands::wishlist::add(&mut storefront, &id)?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&mut storefront, &id),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&mut storefront, &id)?,
            WishlistAction::Clear => commands::wishlist::clear(&mut storefront),
        },
        Commands::Login { email, password } => {
            commands::account::login(&mut storefront, &email, password).await?;
        }
        Commands::Signup {
            email,
            password,
            name,
        } => {
            commands::account::signup(&mut storefront, &email, password, name.as_deref()).await?;
        }
        Commands::Logout => commands::account::logout(&mut storefront),
        Commands::Whoami => commands::account::whoami(&storefront),
        Commands::Checkout(args) => commands::checkout::place_order(&mut storefront, args).await?,
    }
    Ok(())
}
