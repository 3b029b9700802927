//! # Popularity Ranking
//!
//! Pure functions behind `Store::popular`.
//!
//! ## Selection Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  distinct products sold    result (limit = 3)                           │
//! │  ──────────────────────    ────────────────────────────────────────     │
//! │  0                         first 3 stock entries                        │
//! │  1                         top sold + first 2 stock entries             │
//! │  2                         top 2 sold + first stock entry               │
//! │  3 or more                 top 3 sold                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Padding takes stock entries in stock order and does not skip products
//! that already appear in the sold ranking. A short stock yields a shorter
//! list, never placeholders.
//!
//! Ranking never reorders the caller's slice; it returns a new vector.

use crate::product::Product;

/// Orders products by descending `sold_quantity`.
///
/// The sort is stable: products with equal sales keep the order they had in
/// `sold` (first-sold first).
pub fn rank_by_popularity<'a>(sold: &[&'a Product]) -> Vec<&'a Product> {
    let mut ranked = sold.to_vec();
    ranked.sort_by(|a, b| b.sold_quantity().cmp(&a.sold_quantity()));
    ranked
}

/// Picks up to `limit` popular products, padding from stock when fewer than
/// `limit` distinct products have sold.
pub fn select_popular<'a>(
    sold: &[&'a Product],
    stock: &[&'a Product],
    limit: usize,
) -> Vec<&'a Product> {
    if sold.is_empty() {
        return stock.iter().take(limit).copied().collect();
    }

    let mut popular: Vec<&Product> = rank_by_popularity(sold)
        .into_iter()
        .take(limit)
        .collect();

    let padding = limit - popular.len();
    popular.extend(stock.iter().take(padding).copied());
    popular
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::product::ProductKind;

    fn toaster(sold: u32) -> Product {
        let mut p = Product::new(
            Money::from_dollars(25),
            20,
            ProductKind::ToasterOven {
                wattage: 50,
                color: "Black".to_string(),
                brand: "Danby".to_string(),
                width_in: 8,
                convection: false,
            },
        )
        .unwrap();
        if sold > 0 {
            p.sell_units(sold).unwrap();
        }
        p
    }

    #[test]
    fn test_rank_descending_and_stable() {
        let a = toaster(1);
        let b = toaster(1);
        let c = toaster(2);
        let sold = [&a, &b, &c];

        let ranked = rank_by_popularity(&sold);
        assert_eq!(ranked, vec![&c, &a, &b]);

        // Input order untouched
        assert_eq!(sold, [&a, &b, &c]);
    }

    #[test]
    fn test_no_sales_returns_stock_prefix() {
        let stock: Vec<Product> = (0..5).map(|_| toaster(0)).collect();
        let stock_refs: Vec<&Product> = stock.iter().collect();

        let popular = select_popular(&[], &stock_refs, 3);
        assert_eq!(popular, stock_refs[..3].to_vec());

        let popular = select_popular(&[], &stock_refs[..2], 3);
        assert_eq!(popular.len(), 2);
    }

    #[test]
    fn test_padding_by_sold_count() {
        let s1 = toaster(4);
        let s2 = toaster(6);
        let s3 = toaster(5);
        let s4 = toaster(1);
        let stock: Vec<Product> = (0..3).map(|_| toaster(0)).collect();
        let stock_refs: Vec<&Product> = stock.iter().collect();

        let one = select_popular(&[&s1], &stock_refs, 3);
        assert_eq!(one, vec![&s1, &stock[0], &stock[1]]);

        let two = select_popular(&[&s1, &s2], &stock_refs, 3);
        assert_eq!(two, vec![&s2, &s1, &stock[0]]);

        let four = select_popular(&[&s1, &s2, &s3, &s4], &stock_refs, 3);
        assert_eq!(four, vec![&s2, &s3, &s1]);
    }

    #[test]
    fn test_padding_may_repeat_sold_product_still_in_stock() {
        let s1 = toaster(1);
        let other = toaster(0);

        let popular = select_popular(&[&s1], &[&s1, &other], 3);
        assert_eq!(popular, vec![&s1, &s1, &other]);
    }

    #[test]
    fn test_short_stock_gives_short_list() {
        let s1 = toaster(2);
        let popular = select_popular(&[&s1], &[], 3);
        assert_eq!(popular, vec![&s1]);
    }
}
