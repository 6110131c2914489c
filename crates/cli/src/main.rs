//! Shopfront CLI - browse the catalog and manage a persistent cart.
//!
//! # Usage
//!
//! ```bash
//! # List products, optionally by category
//! shopfront products
//! shopfront products --category electronics
//!
//! # Manage the cart
//! shopfront add 3
//! shopfront increase 3
//! shopfront decrease 3
//! shopfront remove 3
//! shopfront cart
//!
//! # Place the order and show its summary
//! shopfront checkout
//! shopfront last-order
//! ```
//!
//! Configuration comes from `SHOPFRONT_*` environment variables (see
//! `shopfront_cart::config`); `--data-dir` and `--catalog` override them.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Browse the catalog and manage your cart")]
struct Cli {
    /// Directory holding the persisted cart (overrides `SHOPFRONT_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Catalog URL or file (overrides `SHOPFRONT_CATALOG`)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Products {
        /// Only show this category (`all` for everything)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List catalog categories
    Categories,
    /// Add one unit of a product to the cart
    Add {
        /// Product ID
        id: String,
    },
    /// Increase an item's quantity by one
    Increase {
        /// Product ID
        id: String,
    },
    /// Decrease an item's quantity by one (never below one)
    Decrease {
        /// Product ID
        id: String,
    },
    /// Remove an item from the cart
    Remove {
        /// Product ID
        id: String,
    },
    /// Show the cart with totals
    Cart,
    /// Empty the cart
    Clear,
    /// Place the order and clear the cart
    Checkout,
    /// Show the most recent order
    LastOrder,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so rendered output on stdout stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront_cli=warn,shopfront_cart=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = shopfront_cart::ShopConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(catalog) = cli.catalog {
        config.catalog.source = catalog.parse()?;
    }

    let mut shop = commands::Shop::open(config);

    match cli.command {
        Commands::Products { category } => {
            commands::catalog::products(&shop, category.as_deref()).await;
        }
        Commands::Categories => {
            commands::catalog::categories(&shop).await;
        }
        Commands::Add { id } => commands::cart::add(&mut shop, &id).await?,
        Commands::Increase { id } => commands::cart::change_quantity(&mut shop, &id, 1)?,
        Commands::Decrease { id } => commands::cart::change_quantity(&mut shop, &id, -1)?,
        Commands::Remove { id } => commands::cart::remove(&mut shop, &id)?,
        Commands::Cart => commands::cart::show(&shop),
        Commands::Clear => commands::cart::clear(&mut shop),
        Commands::Checkout => {
            commands::checkout::checkout(&mut shop)?;
        }
        Commands::LastOrder => commands::checkout::last_order(&shop),
    }
    Ok(())
}
