//! # Demonstration Catalogue
//!
//! Builds the pre-populated store used by the demo app and by tests.
//!
//! ## Products
//! Two of each category, stocked in this order:
//!
//! | # | Category | Price | Qty |
//! |---|---|---|---|
//! | 1 | Desktop "Compact" | $100 | 10 |
//! | 2 | Desktop "Server" | $200 | 10 |
//! | 3 | Laptop 15" | $150 | 10 |
//! | 4 | Laptop 16" | $250 | 10 |
//! | 5 | Fridge, no freezer | $500 | 10 |
//! | 6 | Fridge with freezer | $750 | 10 |
//! | 7 | Toaster, no convection | $25 | 10 |
//! | 8 | Toaster with convection | $75 | 10 |

use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::error::CoreResult;
use crate::money::Money;
use crate::product::{Product, ProductKind};
use crate::store::Store;

fn desktop(
    price: i64,
    qty: u32,
    cpu: f64,
    ram: u32,
    ssd: bool,
    storage: u32,
    profile: &str,
) -> CoreResult<Product> {
    Product::new(
        Money::from_dollars(price),
        qty,
        ProductKind::Desktop {
            cpu_speed_ghz: cpu,
            ram_gb: ram,
            ssd,
            storage_gb: storage,
            profile: profile.to_string(),
        },
    )
}

fn laptop(
    price: i64,
    qty: u32,
    cpu: f64,
    ram: u32,
    ssd: bool,
    storage: u32,
    screen: u32,
) -> CoreResult<Product> {
    Product::new(
        Money::from_dollars(price),
        qty,
        ProductKind::Laptop {
            cpu_speed_ghz: cpu,
            ram_gb: ram,
            ssd,
            storage_gb: storage,
            screen_size_in: screen,
        },
    )
}

fn fridge(
    price: i64,
    qty: u32,
    wattage: u32,
    color: &str,
    brand: &str,
    cubic_feet: f64,
    freezer: bool,
) -> CoreResult<Product> {
    Product::new(
        Money::from_dollars(price),
        qty,
        ProductKind::Fridge {
            wattage,
            color: color.to_string(),
            brand: brand.to_string(),
            cubic_feet,
            has_freezer: freezer,
        },
    )
}

fn toaster(
    price: i64,
    qty: u32,
    wattage: u32,
    color: &str,
    brand: &str,
    width: u32,
    convection: bool,
) -> CoreResult<Product> {
    Product::new(
        Money::from_dollars(price),
        qty,
        ProductKind::ToasterOven {
            wattage,
            color: color.to_string(),
            brand: brand.to_string(),
            width_in: width,
            convection,
        },
    )
}

/// The eight demonstration products, in stocking order.
pub fn demo_products() -> CoreResult<Vec<Product>> {
    Ok(vec![
        desktop(100, 10, 3.0, 16, false, 250, "Compact")?,
        desktop(200, 10, 4.0, 32, true, 500, "Server")?,
        laptop(150, 10, 2.5, 16, true, 250, 15)?,
        laptop(250, 10, 3.5, 24, true, 500, 16)?,
        fridge(500, 10, 250, "White", "Sub Zero", 15.5, false)?,
        fridge(750, 10, 125, "Stainless Steel", "Sub Zero", 23.0, true)?,
        toaster(25, 10, 50, "Black", "Danby", 8, false)?,
        toaster(75, 10, 50, "Silver", "Toasty", 12, true)?,
    ])
}

/// Creates a store from `config` and stocks the demonstration products.
///
/// Products that do not fit a small configured capacity are skipped.
pub fn create_store(config: &StoreConfig) -> CoreResult<Store> {
    config.validate()?;
    let mut store = Store::from_config(config);

    for product in demo_products()? {
        let description = product.to_string();
        if !store.add_product(product) {
            warn!(product = %description, "Demonstration product skipped, stock full");
        }
    }

    info!(
        store = %store.name(),
        stocked = store.stock_len(),
        capacity = store.capacity(),
        "Store created"
    );
    Ok(store)
}

/// Creates the default "Watts Up Electronics" store.
pub fn create_default_store() -> CoreResult<Store> {
    create_store(&StoreConfig::default())
}
