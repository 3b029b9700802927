//! # watts-core: Store Logic for Watts Up Electronics
//!
//! Bounded stock, a shopping cart, sale completion and popularity ranking
//! for a small electronics store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Watts Up Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/watts-demo (binary)                        │   │
//! │  │    logging setup ──► config ──► scripted session ──► JSON       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ watts-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │  product  │  │   store   │  │ popularity │  │  money   │  │   │
//! │  │   │  Product  │  │   Store   │  │  ranking   │  │  Money   │  │   │
//! │  │   │ ProductId │  │SaleSummary│  │  padding   │  │          │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   catalog • snapshot • shared • config • validation • error    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Product entities and their categories
//! - [`store`] - The stock / cart / sale state machine
//! - [`popularity`] - Pure popularity ranking
//! - [`catalog`] - The pre-populated demonstration store
//! - [`snapshot`] - Serializable read model
//! - [`shared`] - Lock-protected store handle
//! - [`money`] - Integer money
//! - [`config`] - Store configuration loading
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use watts_core::catalog::create_default_store;
//! use watts_core::Money;
//!
//! let mut store = create_default_store().unwrap();
//! let toaster = store.stock_items()[6].id();
//!
//! store.add_to_cart(toaster).unwrap();
//! store.add_to_cart(toaster).unwrap();
//! assert_eq!(store.cart_worth(), Money::from_dollars(50));
//!
//! store.complete_sale();
//! assert_eq!(store.revenue(), Money::from_dollars(50));
//! assert_eq!(store.popular()[0].id(), toaster);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod money;
pub mod popularity;
pub mod product;
pub mod shared;
pub mod snapshot;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::StoreConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{Product, ProductId, ProductKind};
pub use shared::SharedStore;
pub use snapshot::StoreSnapshot;
pub use store::{SaleSummary, Store};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name used when no configuration overrides it.
pub const DEFAULT_STORE_NAME: &str = "Watts Up Electronics";

/// Stock entries a store holds unless configured otherwise.
pub const DEFAULT_STOCK_CAPACITY: usize = 10;

/// Upper bound accepted for a configured stock capacity.
pub const MAX_STOCK_CAPACITY: usize = 1000;

/// Maximum store name length, in characters.
pub const MAX_STORE_NAME_LEN: usize = 100;

/// Length of the popular-items list.
pub const POPULAR_LIMIT: usize = 3;
