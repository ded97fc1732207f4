//! Product endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use barback_core::{ProductId, Provider};

use crate::db::{ProductRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::state::AppState;

/// Request body for `POST /products`.
///
/// Wire names match what the kitchen frontend sends.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub nombre: String,
    #[serde(default)]
    pub stock_actual: i32,
    #[serde(default = "default_min_stock")]
    pub stock_minimo: i32,
    #[serde(default)]
    pub proveedor: Option<Provider>,
}

const fn default_min_stock() -> i32 {
    5
}

/// Response body for a created product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub nombre: String,
    pub stock_actual: i32,
    pub stock_minimo: i32,
    pub proveedor: Option<Provider>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            nombre: product.name,
            stock_actual: product.stock,
            stock_minimo: product.min_stock,
            proveedor: product.provider,
        }
    }
}

/// Create a product.
///
/// `stock_actual` defaults to 0 and `stock_minimo` to 5 when absent.
///
/// # Errors
///
/// Returns `AppError::Validation` if `nombre` is empty.
/// Returns `AppError::Database` if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    if body.nombre.trim().is_empty() {
        return Err(AppError::Validation("nombre must not be empty".to_string()));
    }

    let input = NewProduct {
        name: body.nombre,
        stock: body.stock_actual,
        min_stock: body.stock_minimo,
        provider: body.proveedor,
    };

    let product = ProductRepository::new(state.pool()).create(&input).await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Request body for `PUT /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub stock: Option<i32>,
}

/// Response body for a successful update.
#[derive(Debug, Serialize)]
pub struct UpdateProductResponse {
    pub message: &'static str,
}

/// Update a product's name and/or stock.
///
/// Absent fields keep their stored value.
///
/// # Errors
///
/// Returns `AppError::Validation` if `name` is present but empty.
/// Returns `AppError::NotFound` for unknown ids.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<UpdateProductResponse>> {
    if let Some(name) = &body.name
        && name.trim().is_empty()
    {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }

    let input = UpdateProduct {
        name: body.name,
        stock: body.stock,
    };

    ProductRepository::new(state.pool())
        .update(ProductId::new(id), &input)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("product {id}")),
            other => AppError::Database(other),
        })?;

    Ok(Json(UpdateProductResponse { message: "updated" }))
}
