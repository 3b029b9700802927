//! # Products
//!
//! The entities the store stocks, carts and sells.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Two products with the same price, quantity and attributes are still    │
//! │  two different products. Stock, cart and sold records hold ProductId    │
//! │  values and compare those, never field values.                          │
//! │                                                                         │
//! │    Product { id: 7f3a.., price: $100, qty: 10, Desktop "Compact" }      │
//! │    Product { id: c091.., price: $100, qty: 10, Desktop "Compact" }      │
//! │                         a != b                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Categories
//! Desktop and Laptop are computers (CPU, RAM, storage). Fridge and
//! ToasterOven are appliances (wattage, color, brand). Only the description
//! differs between categories; every store rule treats them alike.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_price;

// =============================================================================
// Product Id
// =============================================================================

/// Stable identity of a product (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh id.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// Category-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ProductKind {
    Desktop {
        cpu_speed_ghz: f64,
        ram_gb: u32,
        ssd: bool,
        storage_gb: u32,
        /// Case profile, e.g. "Compact" or "Server".
        profile: String,
    },
    Laptop {
        cpu_speed_ghz: f64,
        ram_gb: u32,
        ssd: bool,
        storage_gb: u32,
        screen_size_in: u32,
    },
    Fridge {
        wattage: u32,
        color: String,
        brand: String,
        cubic_feet: f64,
        has_freezer: bool,
    },
    ToasterOven {
        wattage: u32,
        color: String,
        brand: String,
        width_in: u32,
        convection: bool,
    },
}

impl ProductKind {
    /// Human-readable category name.
    pub fn category(&self) -> &'static str {
        match self {
            ProductKind::Desktop { .. } => "Desktop",
            ProductKind::Laptop { .. } => "Laptop",
            ProductKind::Fridge { .. } => "Fridge",
            ProductKind::ToasterOven { .. } => "Toaster Oven",
        }
    }
}

fn drive_type(ssd: bool) -> &'static str {
    if ssd {
        "SSD"
    } else {
        "HDD"
    }
}

fn with_or_without(flag: bool) -> &'static str {
    if flag {
        "with"
    } else {
        "without"
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKind::Desktop {
                cpu_speed_ghz,
                ram_gb,
                ssd,
                storage_gb,
                profile,
            } => write!(
                f,
                "{} Desktop PC with {:.1}ghz CPU, {}GB RAM, {}GB {} drive.",
                profile,
                cpu_speed_ghz,
                ram_gb,
                storage_gb,
                drive_type(*ssd)
            ),
            ProductKind::Laptop {
                cpu_speed_ghz,
                ram_gb,
                ssd,
                storage_gb,
                screen_size_in,
            } => write!(
                f,
                "{} inch Laptop PC with {:.1}ghz CPU, {}GB RAM, {}GB {} drive.",
                screen_size_in,
                cpu_speed_ghz,
                ram_gb,
                storage_gb,
                drive_type(*ssd)
            ),
            ProductKind::Fridge {
                wattage,
                color,
                brand,
                cubic_feet,
                has_freezer,
            } => write!(
                f,
                "{:.1} cu. ft. {} Fridge {} Freezer ({}, {} watts)",
                cubic_feet,
                brand,
                with_or_without(*has_freezer),
                color,
                wattage
            ),
            ProductKind::ToasterOven {
                wattage,
                color,
                brand,
                width_in,
                convection,
            } => write!(
                f,
                "{} inch {} Toaster {} convection ({}, {} watts)",
                width_in,
                brand,
                with_or_without(*convection),
                color,
                wattage
            ),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product the store can stock and sell.
///
/// Quantities only change through [`Product::sell_units`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    price: Money,
    /// Units still available.
    stock_quantity: u32,
    /// Units sold so far.
    sold_quantity: u32,
    kind: ProductKind,
}

impl Product {
    /// Creates a product with a fresh identity.
    ///
    /// ## Errors
    /// `CoreError::Validation` when the price is not positive.
    pub fn new(price: Money, stock_quantity: u32, kind: ProductKind) -> CoreResult<Self> {
        validate_price(price)?;
        Ok(Product {
            id: ProductId::new(),
            price,
            stock_quantity,
            sold_quantity: 0,
            kind,
        })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    #[inline]
    pub fn sold_quantity(&self) -> u32 {
        self.sold_quantity
    }

    #[inline]
    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Sells `units` units and returns the proceeds (`price × units`).
    ///
    /// ## Errors
    /// - `InvalidQuantity` for zero units
    /// - `InsufficientStock` when `units` exceeds the available quantity
    ///
    /// The product is left untouched on error.
    pub fn sell_units(&mut self, units: u32) -> CoreResult<Money> {
        if units == 0 {
            return Err(CoreError::InvalidQuantity(units));
        }
        if units > self.stock_quantity {
            return Err(CoreError::InsufficientStock {
                product: self.id,
                available: self.stock_quantity,
                requested: units,
            });
        }

        self.stock_quantity -= units;
        self.sold_quantity += units;
        Ok(self.price * units)
    }
}

/// Identity equality: two products are equal only if they are the same entity.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn compact_desktop() -> ProductKind {
        ProductKind::Desktop {
            cpu_speed_ghz: 3.0,
            ram_gb: 16,
            ssd: false,
            storage_gb: 250,
            profile: "Compact".to_string(),
        }
    }

    #[test]
    fn test_identity_not_value_equality() {
        let a = Product::new(Money::from_dollars(100), 10, compact_desktop()).unwrap();
        let b = Product::new(Money::from_dollars(100), 10, compact_desktop()).unwrap();

        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_new_rejects_non_positive_price() {
        let err = Product::new(Money::zero(), 10, compact_desktop()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_sell_units() {
        let mut p = Product::new(Money::from_dollars(150), 10, compact_desktop()).unwrap();

        let proceeds = p.sell_units(3).unwrap();
        assert_eq!(proceeds, Money::from_dollars(450));
        assert_eq!(p.stock_quantity(), 7);
        assert_eq!(p.sold_quantity(), 3);
    }

    #[test]
    fn test_sell_units_insufficient_stock_leaves_product_untouched() {
        let mut p = Product::new(Money::from_dollars(25), 2, compact_desktop()).unwrap();

        let err = p.sell_units(3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 2,
                requested: 3,
                ..
            }
        ));
        assert_eq!(p.stock_quantity(), 2);
        assert_eq!(p.sold_quantity(), 0);

        assert!(matches!(p.sell_units(0), Err(CoreError::InvalidQuantity(0))));
    }

    #[test]
    fn test_descriptions() {
        let desktop = Product::new(Money::from_dollars(100), 10, compact_desktop()).unwrap();
        assert_eq!(
            desktop.to_string(),
            "Compact Desktop PC with 3.0ghz CPU, 16GB RAM, 250GB HDD drive."
        );

        let laptop = ProductKind::Laptop {
            cpu_speed_ghz: 2.5,
            ram_gb: 16,
            ssd: true,
            storage_gb: 250,
            screen_size_in: 15,
        };
        assert_eq!(
            laptop.to_string(),
            "15 inch Laptop PC with 2.5ghz CPU, 16GB RAM, 250GB SSD drive."
        );

        let fridge = ProductKind::Fridge {
            wattage: 125,
            color: "Stainless Steel".to_string(),
            brand: "Sub Zero".to_string(),
            cubic_feet: 23.0,
            has_freezer: true,
        };
        assert_eq!(
            fridge.to_string(),
            "23.0 cu. ft. Sub Zero Fridge with Freezer (Stainless Steel, 125 watts)"
        );

        let toaster = ProductKind::ToasterOven {
            wattage: 50,
            color: "Black".to_string(),
            brand: "Danby".to_string(),
            width_in: 8,
            convection: false,
        };
        assert_eq!(
            toaster.to_string(),
            "8 inch Danby Toaster without convection (Black, 50 watts)"
        );
        assert_eq!(toaster.category(), "Toaster Oven");
    }

    #[test]
    fn test_kind_serializes_with_category_tag() {
        let json = serde_json::to_value(compact_desktop()).unwrap();
        assert_eq!(json["category"], "desktop");
        assert_eq!(json["profile"], "Compact");
    }
}
