//! Product domain types.

use chrono::{DateTime, Utc};

use barback_core::{ProductId, Provider};

/// A stock-tracked item behind the bar or in the kitchen (domain type).
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Quantity on hand. Not clamped: a miscount can drive it negative.
    pub stock: i32,
    /// Reorder threshold. Set at creation and never derived.
    pub min_stock: i32,
    /// Who supplies it, if recorded.
    pub provider: Option<Provider>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether stock has fallen strictly below the reorder threshold.
    ///
    /// Sitting exactly at the minimum does not count.
    #[must_use]
    pub const fn is_below_min(&self) -> bool {
        self.stock < self.min_stock
    }
}

/// Fields for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub stock: i32,
    pub min_stock: i32,
    pub provider: Option<Provider>,
}

/// Partial update for a product. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub stock: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i32, min_stock: i32) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Cerveza Cruzcampo".to_string(),
            stock,
            min_stock,
            provider: None,
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_below_min_is_strict() {
        assert!(product(3, 10).is_below_min());
        assert!(!product(10, 10).is_below_min());
        assert!(!product(20, 10).is_below_min());
    }

    #[test]
    fn test_negative_stock_counts_as_below() {
        assert!(!product(-2, 0).is_below_min());
        assert!(product(-2, 5).is_below_min());
    }
}
