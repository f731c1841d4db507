use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::errors::AppError;
use crate::notify::Toast;
use crate::state::AppState;

/// GET /api/v1/notifications
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<Toast>> {
    Json(state.toasts.list())
}

/// DELETE /api/v1/notifications/:id
pub async fn dismiss_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.toasts.remove_toast(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Notification {id} not found")))
    }
}
