//! Repository tests against a live database.
//!
//! These tests require a `PostgreSQL` database with migrations applied:
//!
//! ```bash
//! cargo run -p barback-cli -- migrate
//! cargo test -p barback-integration-tests -- --ignored
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use secrecy::SecretString;
use serde_json::json;
use sqlx::PgPool;

use barback_core::{ProductId, Provider};
use barback_server::db::{self, ProductRepository, RepositoryError, ShiftTaskRepository};
use barback_server::models::{NewProduct, NewShiftTask, UpdateProduct};

async fn pool() -> PgPool {
    let url = std::env::var("BARBACK_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("BARBACK_DATABASE_URL not set");

    db::create_pool(&SecretString::from(url))
        .await
        .expect("Failed to create pool")
}

fn unique_name(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{prefix}-{nanos}")
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_checklist_round_trip_preserves_order() {
    let pool = pool().await;
    let tasks = ShiftTaskRepository::new(&pool);

    let checklist = json!([
        {"item": "Check cameras", "done": true},
        {"item": "Prep sauce", "done": false}
    ]);

    let created = tasks
        .create(&NewShiftTask {
            shift_name: "Evening".to_string(),
            checklist: checklist.clone(),
        })
        .await
        .expect("Failed to create shift task");

    let fetched = tasks
        .get(created.id)
        .await
        .expect("Failed to get shift task")
        .expect("Shift task exists");

    assert_eq!(fetched.shift_name, "Evening");
    assert_eq!(fetched.checklist, checklist);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_checklist_accepts_arbitrary_shapes() {
    let pool = pool().await;
    let tasks = ShiftTaskRepository::new(&pool);

    // Not the usual item/done records at all. The store must not care.
    let checklist = json!({"freeform": ["a", "b"], "note": 7});

    let created = tasks
        .create(&NewShiftTask {
            shift_name: "Inventory night".to_string(),
            checklist: checklist.clone(),
        })
        .await
        .expect("Failed to create shift task");

    let fetched = tasks
        .get(created.id)
        .await
        .expect("Failed to get shift task")
        .expect("Shift task exists");

    assert_eq!(fetched.checklist, checklist);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_product_create_and_get() {
    let pool = pool().await;
    let products = ProductRepository::new(&pool);
    let name = unique_name("Ginebra");

    let created = products
        .create(&NewProduct {
            name: name.clone(),
            stock: 4,
            min_stock: 6,
            provider: Some(Provider::Info(
                json!({"name": "Keiko", "delivery_day": "Tuesday"})
                    .as_object()
                    .expect("object")
                    .clone(),
            )),
        })
        .await
        .expect("Failed to create product");

    let fetched = products
        .get(created.id)
        .await
        .expect("Failed to get product")
        .expect("Product exists");

    assert_eq!(fetched.name, name);
    assert_eq!(fetched.stock, 4);
    assert_eq!(fetched.min_stock, 6);
    assert_eq!(
        fetched.provider.as_ref().and_then(Provider::display_name),
        Some("Keiko")
    );
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_get_unknown_id_is_none() {
    let pool = pool().await;

    let missing = ProductRepository::new(&pool)
        .get(ProductId::new(i32::MAX))
        .await
        .expect("Query succeeds");

    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_update_unknown_id_is_not_found() {
    let pool = pool().await;

    let result = ProductRepository::new(&pool)
        .update(
            ProductId::new(i32::MAX),
            &UpdateProduct {
                name: None,
                stock: Some(1),
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_partial_update_keeps_other_fields() {
    let pool = pool().await;
    let products = ProductRepository::new(&pool);
    let name = unique_name("Ron");

    let created = products
        .create(&NewProduct {
            name: name.clone(),
            stock: 9,
            min_stock: 4,
            provider: None,
        })
        .await
        .expect("Failed to create product");

    let updated = products
        .update(
            created.id,
            &UpdateProduct {
                name: None,
                stock: Some(2),
            },
        )
        .await
        .expect("Failed to update product");

    assert_eq!(updated.name, name, "name untouched by stock-only update");
    assert_eq!(updated.stock, 2);
    assert_eq!(updated.min_stock, 4);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL"]
async fn test_list_below_min_uses_strict_inequality() {
    let pool = pool().await;
    let products = ProductRepository::new(&pool);

    let below = products
        .create(&NewProduct {
            name: unique_name("Vodka"),
            stock: 1,
            min_stock: 3,
            provider: None,
        })
        .await
        .expect("Failed to create product");

    let at_minimum = products
        .create(&NewProduct {
            name: unique_name("Whisky"),
            stock: 3,
            min_stock: 3,
            provider: None,
        })
        .await
        .expect("Failed to create product");

    let flagged = products
        .list_below_min()
        .await
        .expect("Failed to list below-min products");

    assert!(flagged.iter().any(|p| p.id == below.id));
    assert!(!flagged.iter().any(|p| p.id == at_minimum.id));
}
