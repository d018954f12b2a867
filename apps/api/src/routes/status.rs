use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::status::{StatusCheck, StatusCheckCreate};
use crate::state::AppState;

const STATUS_LIST_LIMIT: i64 = 1000;

/// POST /api/status
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(req): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, AppError> {
    let check = StatusCheck::new(req.client_name);
    state.store.insert_status_check(&check).await?;
    Ok(Json(check))
}

/// GET /api/status
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    Ok(Json(state.store.list_status_checks(STATUS_LIST_LIMIT).await?))
}
