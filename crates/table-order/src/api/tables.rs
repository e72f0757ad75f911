use crate::api::payload::{ApiMessage, TableRequest};
use crate::api::{ApiJson, AppError, AppState};
use crate::model::TableId;
use axum::extract::State;
use axum::Json;

/// POST /api/lockTable
pub async fn lock_table(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TableRequest>,
) -> Result<Json<ApiMessage>, AppError> {
    let table = TableId::parse(request.table.as_deref().unwrap_or_default())?;

    if state.tables.lock(&table).await? {
        Ok(Json(ApiMessage::ok()))
    } else {
        Err(AppError::Conflict("Table already locked".to_string()))
    }
}

/// POST /api/releaseTable
///
/// Always succeeds; a missing or unlocked table is ignored.
pub async fn release_table(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TableRequest>,
) -> Result<Json<ApiMessage>, AppError> {
    if let Some(table) = request
        .table
        .as_deref()
        .and_then(|raw| TableId::parse(raw).ok())
    {
        state.tables.release(&table).await?;
    }
    Ok(Json(ApiMessage::ok()))
}
