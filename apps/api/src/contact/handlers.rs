use axum::{extract::State, Json};

use crate::contact::intake::{list_recent_contacts, submit_contact};
use crate::errors::AppError;
use crate::models::contact::{ContactRequest, ContactResponse, ContactSubmission};
use crate::state::AppState;

/// POST /api/contact
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let response = submit_contact(state.store.as_ref(), &req).await?;
    Ok(Json(response))
}

/// GET /api/admin/contacts
pub async fn handle_list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>, AppError> {
    Ok(Json(list_recent_contacts(state.store.as_ref()).await?))
}
