use crate::api::payload::OrdersQuery;
use crate::api::{ApiJson, AppError, AppState};
use crate::model::{Order, OrderDraft, TableId};
use axum::extract::{Query, State};
use axum::Json;

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<OrderDraft>,
) -> Result<Json<Order>, AppError> {
    let order = state.orders.create_order(draft).await?;
    Ok(Json(order))
}

/// GET /api/orders?table=
///
/// A blank `table` is the same as none.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<Order>>, AppError> {
    let table = query
        .table
        .as_deref()
        .and_then(|raw| TableId::parse(raw).ok());
    let orders = state.orders.list_orders(table).await?;
    Ok(Json(orders))
}
