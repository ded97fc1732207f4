//! Product repository for database operations.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;

use barback_core::{ProductId, Provider};

use super::RepositoryError;
use crate::models::{NewProduct, Product, UpdateProduct};

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    stock: i32,
    min_stock: i32,
    provider: Option<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let provider = row
            .provider
            .map(serde_json::from_value::<Provider>)
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid provider in database: {e}"))
            })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            stock: row.stock,
            min_stock: row.min_stock,
            provider,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the provider cannot be
    /// serialized.
    pub async fn create(&self, input: &NewProduct) -> Result<Product, RepositoryError> {
        let provider = input
            .provider
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("failed to serialize provider: {e}"))
            })?;

        let row: ProductRow = sqlx::query_as(
            r#"
            INSERT INTO product (name, stock, min_stock, provider)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, stock, min_stock, provider, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(input.stock)
        .bind(input.min_stock)
        .bind(provider)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, stock, min_stock, provider, created_at, updated_at
            FROM product
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List all products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, stock, min_stock, provider, created_at, updated_at
            FROM product
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// List products whose stock is strictly below their reorder threshold.
    ///
    /// This is the snapshot the reorder advisory consumes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_below_min(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, stock, min_stock, provider, created_at, updated_at
            FROM product
            WHERE stock < min_stock
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Apply a partial update to a product's name and/or stock.
    ///
    /// Fields left as `None` keep their stored value. Concurrent updates
    /// are last-write-wins: the statement is atomic per row, but there is
    /// no version check.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        input: &UpdateProduct,
    ) -> Result<Product, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            UPDATE product
            SET name = COALESCE($2, name),
                stock = COALESCE($3, stock),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, stock, min_stock, provider, created_at, updated_at
            "#,
        )
        .bind(id.as_i32())
        .bind(input.name.as_deref())
        .bind(input.stock)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)?.try_into()
    }

    /// Count all products.
    ///
    /// Used as the gate for idempotent seeding.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM product")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
