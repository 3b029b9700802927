//! # Store
//!
//! The inventory / cart / sale state machine.
//!
//! ## Product Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product Movement                                   │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  complete_sale  ┌──────────┐  │
//! │  │ In Stock │───────────────►│ In Cart  │────────────────►│   Sold   │  │
//! │  └──────────┘                └──────────┘                 └──────────┘  │
//! │       ▲                           │                                     │
//! │       └───── remove_from_cart ────┘                                     │
//! │                                                                         │
//! │  A product leaves stock when its cart count reaches its available       │
//! │  quantity, and comes back when a unit is removed from the cart.         │
//! │  Sold is terminal and tracked in `sold_items`.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `stock.len() <= capacity`, stock is always compacted
//! - a product is in stock iff its cart count is below its available quantity
//!   (valid usage: only add stocked products, only remove carted products)
//! - `cart_worth` equals the sum of cart prices (valid usage)
//! - `sold_items` holds each product at most once
//!
//! ## Known Inconsistency
//! `remove_from_cart` for a product that is not in the cart still lowers
//! `cart_worth`. Callers must only remove what they added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::popularity::select_popular;
use crate::product::{Product, ProductId};
use crate::{DEFAULT_STOCK_CAPACITY, POPULAR_LIMIT};

// =============================================================================
// Sale Summary
// =============================================================================

/// Outcome of one `complete_sale` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleSummary {
    /// 1-based sequence number (equals `total_sales` after the sale).
    pub sale_number: u32,
    /// Units sold in this transaction.
    pub units: u32,
    /// Proceeds added to revenue by this transaction.
    pub proceeds: Money,
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Store
// =============================================================================

/// A single store: bounded stock, cart, sold records, aggregates.
#[derive(Debug, Clone)]
pub struct Store {
    name: String,
    capacity: usize,
    /// Every product the store has ever stocked. Entities outlive their
    /// stock slot so cart and sold records can keep referring to them.
    products: HashMap<ProductId, Product>,
    stock: Vec<ProductId>,
    /// One entry per unit intended for purchase.
    cart: Vec<ProductId>,
    /// Distinct products sold at least once, in first-sale order.
    sold_items: Vec<ProductId>,
    cart_worth: Money,
    revenue: Money,
    total_sales: u32,
}

impl Store {
    /// Creates an empty store with the default capacity (10).
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, DEFAULT_STOCK_CAPACITY)
    }

    /// Creates an empty store holding at most `capacity` stock entries.
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Store {
            name: name.into(),
            capacity,
            products: HashMap::new(),
            stock: Vec::with_capacity(capacity),
            cart: Vec::new(),
            sold_items: Vec::new(),
            cart_worth: Money::zero(),
            revenue: Money::zero(),
            total_sales: 0,
        }
    }

    /// Creates an empty store from a validated config.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_capacity(config.name.clone(), config.stock_capacity)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cart_worth(&self) -> Money {
        self.cart_worth
    }

    pub fn total_sales(&self) -> u32 {
        self.total_sales
    }

    pub fn revenue(&self) -> Money {
        self.revenue
    }

    /// Live view of the cart, one id per unit, in insertion order.
    pub fn cart_items(&self) -> &[ProductId] {
        &self.cart
    }

    /// Products sold at least once, in first-sale order.
    pub fn sold_items(&self) -> &[ProductId] {
        &self.sold_items
    }

    /// Looks up a product the store has stocked at some point.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Resolves the cart into products, one entry per unit.
    pub fn cart_products(&self) -> Vec<&Product> {
        self.resolve(&self.cart)
    }

    fn resolve(&self, ids: &[ProductId]) -> Vec<&Product> {
        ids.iter().filter_map(|id| self.products.get(id)).collect()
    }

    // =========================================================================
    // Stock
    // =========================================================================

    /// Adds a product to the end of the stock.
    ///
    /// Returns `false` and leaves the store untouched when stock is full.
    /// If the store already knows this product id, its current state is kept.
    pub fn add_product(&mut self, product: Product) -> bool {
        let id = product.id();
        if self.stock.len() >= self.capacity {
            warn!(product_id = %id, capacity = self.capacity, "Stock full, product not added");
            return false;
        }

        self.products.entry(id).or_insert(product);
        self.stock.push(id);
        debug!(product_id = %id, stock_len = self.stock.len(), "Product added to stock");
        true
    }

    /// Puts a known product back at the end of the stock (capacity permitting).
    fn restock(&mut self, id: ProductId) -> bool {
        if self.stock.len() >= self.capacity {
            warn!(product_id = %id, capacity = self.capacity, "Stock full, product not restocked");
            return false;
        }
        self.stock.push(id);
        true
    }

    /// Currently stocked products, in stock order, without gaps.
    pub fn stock_items(&self) -> Vec<&Product> {
        self.resolve(&self.stock)
    }

    /// Number of stock entries.
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Position of a product in the stock.
    pub fn index_of(&self, id: ProductId) -> Option<usize> {
        self.stock.iter().position(|s| *s == id)
    }

    pub fn stock_contains(&self, id: ProductId) -> bool {
        self.stock.contains(&id)
    }

    pub fn sold_items_contains(&self, id: ProductId) -> bool {
        self.sold_items.contains(&id)
    }

    /// Removes the stock entry at `index` and shifts later entries left.
    ///
    /// Out-of-range indices are a no-op and return `None`.
    pub fn remove_from_stock(&mut self, index: usize) -> Option<ProductId> {
        if index >= self.stock.len() {
            debug!(index, stock_len = self.stock.len(), "Stock index out of range, ignoring");
            return None;
        }
        let removed = self.stock.remove(index);
        debug!(product_id = %removed, index, "Product removed from stock");
        Some(removed)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Returns `1 + (units of this product already in the cart)`.
    ///
    /// The baseline of one is the quantity the cart *would* hold after one
    /// more add, which is what `add_to_cart` compares against.
    pub fn cart_quantity(&self, id: ProductId) -> u32 {
        let in_cart = self.cart.iter().filter(|c| **c == id).count() as u32;
        in_cart + 1
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Rules
    /// ```text
    /// cart_worth += price                (always)
    ///
    /// stock_quantity  >  cart_quantity   → append to cart
    /// stock_quantity  == cart_quantity   → remove from stock, append to cart
    /// stock_quantity  <  cart_quantity   → cart unchanged
    /// ```
    /// The last case only happens when a caller adds a product that has
    /// already left the stock; `cart_worth` still grows.
    ///
    /// ## Errors
    /// `ProductNotFound` when the store has never stocked this id.
    pub fn add_to_cart(&mut self, id: ProductId) -> CoreResult<()> {
        let (price, available) = {
            let product = self.product(id).ok_or(CoreError::ProductNotFound(id))?;
            (product.price(), product.stock_quantity())
        };

        self.cart_worth += price;
        let wanted = self.cart_quantity(id);

        match available.cmp(&wanted) {
            Ordering::Greater => {
                self.cart.push(id);
            }
            Ordering::Equal => {
                if let Some(index) = self.index_of(id) {
                    self.remove_from_stock(index);
                }
                self.cart.push(id);
                debug!(product_id = %id, "Last available unit carted, product left stock");
            }
            Ordering::Less => {
                warn!(
                    product_id = %id,
                    available,
                    wanted,
                    "Cart already holds every available unit, cart unchanged"
                );
            }
        }

        debug!(product_id = %id, cart_len = self.cart.len(), cart_worth = %self.cart_worth, "add_to_cart");
        Ok(())
    }

    /// Removes one unit of a product from the cart.
    ///
    /// Lowers `cart_worth` by the price, drops the first matching cart entry
    /// and, if the product is not in stock, puts it back at the end of the
    /// stock (capacity permitting).
    ///
    /// A product that is not in the cart still lowers `cart_worth`.
    ///
    /// ## Errors
    /// `ProductNotFound` when the store has never stocked this id.
    pub fn remove_from_cart(&mut self, id: ProductId) -> CoreResult<()> {
        let price = self
            .product(id)
            .map(Product::price)
            .ok_or(CoreError::ProductNotFound(id))?;

        self.cart_worth -= price;

        match self.cart.iter().position(|c| *c == id) {
            Some(pos) => {
                self.cart.remove(pos);
            }
            None => {
                warn!(
                    product_id = %id,
                    cart_worth = %self.cart_worth,
                    "Product not in cart; cart worth no longer matches cart contents"
                );
            }
        }

        if !self.stock_contains(id) {
            self.restock(id);
        }

        debug!(product_id = %id, cart_len = self.cart.len(), cart_worth = %self.cart_worth, "remove_from_cart");
        Ok(())
    }

    // =========================================================================
    // Sale
    // =========================================================================

    /// Sells every unit in the cart as one transaction.
    ///
    /// Counts a sale even for an empty cart. Each cart entry sells one unit
    /// of its product, in cart order; proceeds go to revenue and the product
    /// is recorded as sold. The cart is emptied and its worth reset.
    pub fn complete_sale(&mut self) -> SaleSummary {
        self.total_sales += 1;
        self.cart_worth = Money::zero();

        let cart = std::mem::take(&mut self.cart);
        let mut units = 0;
        let mut proceeds = Money::zero();

        for id in cart {
            let Some(product) = self.products.get_mut(&id) else {
                continue;
            };

            match product.sell_units(1) {
                Ok(amount) => {
                    proceeds += amount;
                    units += 1;
                }
                Err(e) => {
                    warn!(product_id = %id, error = %e, "Cart unit could not be sold");
                }
            }

            if !self.sold_items.contains(&id) {
                self.sold_items.push(id);
            }
        }

        self.revenue += proceeds;

        info!(
            sale_number = self.total_sales,
            units,
            proceeds = %proceeds,
            revenue = %self.revenue,
            "Sale completed"
        );

        SaleSummary {
            sale_number: self.total_sales,
            units,
            proceeds,
            completed_at: Utc::now(),
        }
    }

    // =========================================================================
    // Popularity
    // =========================================================================

    /// Up to three popular products.
    ///
    /// Ranks sold products by sold quantity and pads with the first stock
    /// entries when fewer than three distinct products have sold. With no
    /// sales at all, returns the first three stock entries.
    ///
    /// Read-only: the sold-items order is never changed.
    pub fn popular(&self) -> Vec<&Product> {
        let sold = self.resolve(&self.sold_items);
        let stock = self.stock_items();
        select_popular(&sold, &stock, POPULAR_LIMIT)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
