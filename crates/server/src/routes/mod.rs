//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /              - Welcome message
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check (database probe)
//!
//! # Inventory
//! GET  /orders/check  - Reorder advisory (shopping list)
//! POST /products      - Create a product
//! PUT  /products/{id} - Update a product's name/stock
//!
//! # Shift checklists
//! GET  /tasks         - All shift tasks with their checklists
//! ```

pub mod orders;
pub mod products;
pub mod tasks;

use axum::{
    Json, Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/orders/check", get(orders::check))
        .route("/tasks", get(tasks::list))
        .route("/products", post(products::create))
        .route("/products/{id}", put(products::update))
}

/// Greeting for the root path.
async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Bienvenido a la API de la Cocina del Bar"
    }))
}
