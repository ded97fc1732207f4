//! Reorder advisory: what to buy before the next shift.
//!
//! Pure computation over a product snapshot. The repository pre-filters
//! with the same predicate, but everything here is a total function of
//! whatever snapshot it is handed, so it tests without a database.

use barback_core::{ProductId, Provider};

use crate::models::Product;

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub current_stock: i32,
    pub min_stock: i32,
    pub quantity_to_order: i32,
    pub provider: Option<Provider>,
}

/// Units to order for a product below its threshold.
///
/// The policy orders up to double the minimum, not merely back to the
/// minimum. Applies arithmetically to negative stock as well.
#[must_use]
pub const fn reorder_quantity(stock: i32, min_stock: i32) -> i32 {
    min_stock * 2 - stock
}

/// Compute the shopping list from a product snapshot.
///
/// A product is flagged iff `stock < min_stock` - strictly, so sitting
/// exactly at the minimum is not flagged. Snapshot order is preserved.
/// An empty snapshot yields an empty list, not an error.
#[must_use]
pub fn advisory(products: &[Product]) -> Vec<ReorderLine> {
    products
        .iter()
        .filter(|product| product.is_below_min())
        .map(|product| ReorderLine {
            product_id: product.id,
            product_name: product.name.clone(),
            current_stock: product.stock,
            min_stock: product.min_stock,
            quantity_to_order: reorder_quantity(product.stock, product.min_stock),
            provider: product.provider.clone(),
        })
        .collect()
}
