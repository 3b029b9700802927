//! # Watts Up Demo
//!
//! Runs a scripted shopping session against the demonstration store and
//! prints the resulting store snapshot as JSON.
//!
//! ## Usage
//! ```bash
//! # Default config location (or defaults when absent)
//! cargo run -p watts-demo
//!
//! # Explicit config file
//! cargo run -p watts-demo -- --config ./store.toml
//!
//! # More logging
//! RUST_LOG=debug cargo run -p watts-demo
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load store config (file, then `WATTS_*` environment overrides)
//! 3. Build the demonstration store
//! 4. Run the session, print the snapshot

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use watts_core::catalog::create_store;
use watts_core::{ProductId, SharedStore, StoreConfig, StoreSnapshot};

fn main() -> Result<()> {
    init_tracing();

    let config_path = parse_config_arg()?;
    let config = StoreConfig::load(config_path).context("loading store config")?;
    info!(name = %config.name, capacity = config.stock_capacity, "Config loaded");

    let store = SharedStore::new(create_store(&config).context("building demonstration store")?);
    run_session(&store)?;

    let snapshot = store.with_store(|s| StoreSnapshot::from(s));
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Two customers: the first buys a couple of toasters and a laptop after
/// changing their mind on a fridge, the second buys every remaining laptop of
/// the same model.
fn run_session(store: &SharedStore) -> Result<()> {
    let stock: Vec<ProductId> = store.with_store(|s| s.stock_items().iter().map(|p| p.id()).collect());
    if stock.len() < 7 {
        bail!("session needs at least 7 stocked products, found {}", stock.len());
    }
    let (laptop, fridge, toaster) = (stock[2], stock[4], stock[6]);

    store.with_store_mut(|s| -> Result<()> {
        s.add_to_cart(toaster)?;
        s.add_to_cart(toaster)?;
        s.add_to_cart(fridge)?;
        s.add_to_cart(laptop)?;
        s.remove_from_cart(fridge)?;
        info!(cart_worth = %s.cart_worth(), units = s.cart_items().len(), "First cart ready");
        s.complete_sale();
        Ok(())
    })?;

    store.with_store_mut(|s| -> Result<()> {
        let remaining = s.product(laptop).map_or(0, |p| p.stock_quantity());
        for _ in 0..remaining {
            s.add_to_cart(laptop)?;
        }
        info!(cart_worth = %s.cart_worth(), units = s.cart_items().len(), "Second cart ready");
        s.complete_sale();
        Ok(())
    })?;

    store.with_store(|s| {
        for (rank, product) in s.popular().iter().enumerate() {
            info!(rank = rank + 1, sold = product.sold_quantity(), "{}", product);
        }
        info!(revenue = %s.revenue(), sales = s.total_sales(), "Session finished");
    });
    Ok(())
}

/// Reads `--config <path>` from the command line.
fn parse_config_arg() -> Result<Option<PathBuf>> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(None),
        [flag, path] if flag == "--config" => Ok(Some(PathBuf::from(path))),
        _ => bail!("usage: watts-demo [--config <path>]"),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every store operation
/// - Default: INFO, debug for watts crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,watts_core=debug,watts_demo=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
