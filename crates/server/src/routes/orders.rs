//! Reorder advisory endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use barback_core::{ProductId, Provider};

use crate::db::ProductRepository;
use crate::error::Result;
use crate::reorder::{self, ReorderLine};
use crate::state::AppState;

/// Response for `GET /orders/check`.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    /// How many products are waiting on a purchase.
    pub pedidos_pendientes: usize,
    /// The shopping list itself.
    pub lista_de_compra: Vec<ShoppingLine>,
}

/// One shopping-list line on the wire.
///
/// Field names are the ones the kitchen frontend already consumes.
#[derive(Debug, Serialize)]
pub struct ShoppingLine {
    pub id: ProductId,
    pub producto: String,
    pub stock_actual: i32,
    pub minimo_requerido: i32,
    pub cantidad_a_pedir: i32,
    pub proveedor: Option<Provider>,
}

impl From<ReorderLine> for ShoppingLine {
    fn from(line: ReorderLine) -> Self {
        Self {
            id: line.product_id,
            producto: line.product_name,
            stock_actual: line.current_stock,
            minimo_requerido: line.min_stock,
            cantidad_a_pedir: line.quantity_to_order,
            proveedor: line.provider,
        }
    }
}

/// Compute the shopping list from current stock levels.
///
/// Products strictly below their minimum are listed with the quantity
/// that restocks them to double the minimum. An empty list is a valid
/// answer, not an error.
///
/// # Errors
///
/// Returns `AppError::Database` if the stock query fails.
pub async fn check(State(state): State<AppState>) -> Result<Json<CheckResponse>> {
    let products = ProductRepository::new(state.pool()).list_below_min().await?;

    let lista_de_compra: Vec<ShoppingLine> = reorder::advisory(&products)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(CheckResponse {
        pedidos_pendientes: lista_de_compra.len(),
        lista_de_compra,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let line = ShoppingLine::from(ReorderLine {
            product_id: ProductId::new(1),
            product_name: "Cerveza Cruzcampo".to_string(),
            current_stock: 3,
            min_stock: 10,
            quantity_to_order: 17,
            provider: Some(Provider::Name("Distribuidora S.A.".to_string())),
        });

        let value = serde_json::to_value(&line).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": 1,
                "producto": "Cerveza Cruzcampo",
                "stock_actual": 3,
                "minimo_requerido": 10,
                "cantidad_a_pedir": 17,
                "proveedor": "Distribuidora S.A."
            })
        );
    }

    #[test]
    fn test_empty_advisory_envelope() {
        let response = CheckResponse {
            pedidos_pendientes: 0,
            lista_de_compra: vec![],
        };

        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(
            value,
            json!({"pedidos_pendientes": 0, "lista_de_compra": []})
        );
    }
}
