//! Sample data for an empty database.
//!
//! Seeding is an explicit step: the server runs it once at startup when
//! `BARBACK_SEED_ON_STARTUP` is set (the default), and `barback seed`
//! runs it on demand. The gate is an empty `product` table, so repeated
//! runs never duplicate rows.

use serde_json::json;
use sqlx::PgPool;

use barback_core::Provider;

use crate::db::{ProductRepository, RepositoryError, ShiftTaskRepository};
use crate::models::{NewProduct, NewShiftTask};

/// Insert the sample rows unconditionally.
///
/// # Errors
///
/// Returns `RepositoryError` if any insert fails.
pub async fn seed(pool: &PgPool) -> Result<(), RepositoryError> {
    let products = ProductRepository::new(pool);
    for input in sample_products() {
        products.create(&input).await?;
    }

    ShiftTaskRepository::new(pool)
        .create(&sample_shift_task())
        .await?;

    tracing::info!("Seeded sample products and shift task");
    Ok(())
}

/// Insert the sample rows only when the product table is empty.
///
/// Returns `true` when seeding ran.
///
/// # Errors
///
/// Returns `RepositoryError` if the count or any insert fails.
pub async fn seed_if_empty(pool: &PgPool) -> Result<bool, RepositoryError> {
    let count = ProductRepository::new(pool).count().await?;
    if count > 0 {
        tracing::debug!(count, "Products already present, skipping seed");
        return Ok(false);
    }

    seed(pool).await?;
    Ok(true)
}

fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Cerveza Cruzcampo".to_string(),
            stock: 3,
            min_stock: 10,
            provider: Some(Provider::from("Distribuidora S.A.")),
        },
        NewProduct {
            name: "Coca-Cola".to_string(),
            stock: 20,
            min_stock: 10,
            provider: Some(Provider::from("Keiko")),
        },
        NewProduct {
            name: "Aceite de Oliva".to_string(),
            stock: 2,
            min_stock: 5,
            provider: Some(Provider::from("Aceites del Sur")),
        },
    ]
}

fn sample_shift_task() -> NewShiftTask {
    NewShiftTask {
        shift_name: "Mañana".to_string(),
        checklist: json!([
            {"item": "Revisar cámaras", "done": true},
            {"item": "Preparar sofrito croquetas", "done": false}
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_products_shape() {
        let products = sample_products();
        assert_eq!(products.len(), 3);

        // Two of the three samples sit below their threshold, so a fresh
        // database produces a non-empty advisory out of the box.
        let below = products.iter().filter(|p| p.stock < p.min_stock).count();
        assert_eq!(below, 2);
    }

    #[test]
    fn test_sample_shift_task_is_ordered_checklist() {
        let task = sample_shift_task();
        assert_eq!(task.shift_name, "Mañana");

        let entries = task.checklist.as_array().expect("checklist is an array");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["item"], "Revisar cámaras");
        assert_eq!(entries[0]["done"], true);
        assert_eq!(entries[1]["done"], false);
    }
}
