use crate::api::payload::{FeedbackRequest, FeedbackResponse, OrderRef};
use crate::api::{ApiJson, AppError, AppState};
use axum::extract::State;
use axum::Json;

/// POST /api/feedback
///
/// Missing feedback text is stored as the empty string.
pub async fn save_feedback(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let order_id = request
        .order_id
        .and_then(OrderRef::into_order_id)
        .ok_or_else(|| AppError::Validation("Order ID is required".to_string()))?;

    let order = state
        .orders
        .attach_feedback(order_id, request.feedback.unwrap_or_default())
        .await?;

    Ok(Json(FeedbackResponse {
        success: true,
        message: "Feedback saved".to_string(),
        order,
    }))
}
