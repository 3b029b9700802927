//! # Store Snapshot
//!
//! A serializable read model of a [`Store`] for display layers.
//!
//! The cart is grouped into one line per product with a unit count;
//! stock and popular lists keep their order.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::product::{Product, ProductId};
use crate::store::Store;

/// One product as shown in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    pub product_id: ProductId,
    pub category: String,
    pub description: String,
    pub price: Money,
    pub stock_quantity: u32,
    pub sold_quantity: u32,
}

impl From<&Product> for ProductLine {
    fn from(p: &Product) -> Self {
        ProductLine {
            product_id: p.id(),
            category: p.kind().category().to_string(),
            description: p.to_string(),
            price: p.price(),
            stock_quantity: p.stock_quantity(),
            sold_quantity: p.sold_quantity(),
        }
    }
}

/// Units of one product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: ProductLine,
    pub units: u32,
    /// `price × units`
    pub line_total: Money,
}

/// Store state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub name: String,
    pub cart_worth: Money,
    pub revenue: Money,
    pub total_sales: u32,
    pub stock: Vec<ProductLine>,
    /// Grouped by product, in order of first appearance in the cart.
    pub cart: Vec<CartLine>,
    pub popular: Vec<ProductLine>,
}

impl From<&Store> for StoreSnapshot {
    fn from(store: &Store) -> Self {
        let mut cart: Vec<CartLine> = Vec::new();
        for product in store.cart_products() {
            match cart.iter_mut().find(|l| l.product.product_id == product.id()) {
                Some(line) => {
                    line.units += 1;
                    line.line_total += product.price();
                }
                None => cart.push(CartLine {
                    product: ProductLine::from(product),
                    units: 1,
                    line_total: product.price(),
                }),
            }
        }

        StoreSnapshot {
            name: store.name().to_string(),
            cart_worth: store.cart_worth(),
            revenue: store.revenue(),
            total_sales: store.total_sales(),
            stock: store.stock_items().into_iter().map(ProductLine::from).collect(),
            cart,
            popular: store.popular().into_iter().map(ProductLine::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::create_default_store;

    #[test]
    fn test_snapshot_groups_cart() {
        let mut store = create_default_store().unwrap();
        let ids: Vec<ProductId> = store.stock_items().iter().map(|p| p.id()).collect();
        store.add_to_cart(ids[6]).unwrap();
        store.add_to_cart(ids[0]).unwrap();
        store.add_to_cart(ids[6]).unwrap();

        let snapshot = StoreSnapshot::from(&store);

        assert_eq!(snapshot.cart.len(), 2);
        assert_eq!(snapshot.cart[0].product.product_id, ids[6]);
        assert_eq!(snapshot.cart[0].units, 2);
        assert_eq!(snapshot.cart[0].line_total, Money::from_dollars(50));
        assert_eq!(snapshot.cart[1].units, 1);
        assert_eq!(snapshot.cart_worth, Money::from_dollars(150));
        assert_eq!(snapshot.stock.len(), 8);
        assert_eq!(snapshot.popular.len(), 3);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let store = create_default_store().unwrap();
        let json = serde_json::to_value(StoreSnapshot::from(&store)).unwrap();

        assert_eq!(json["name"], "Watts Up Electronics");
        assert_eq!(json["cartWorth"], 0);
        assert_eq!(json["totalSales"], 0);
        assert_eq!(json["stock"][0]["category"], "Desktop");
        assert_eq!(json["stock"][0]["price"], 10_000);
        assert_eq!(
            json["stock"][0]["description"],
            "Compact Desktop PC with 3.0ghz CPU, 16GB RAM, 250GB HDD drive."
        );
    }
}
