//! Contact intake pipeline.
//!
//! Order matters: request bounds → sanitize → normalize → re-validate →
//! persist. A response is only built after the insert is confirmed.

use tracing::{info, warn};

use crate::contact::sanitize::{normalize_email, sanitize_text};
use crate::contact::validation::{validate_request_shape, validate_sanitized};
use crate::errors::AppError;
use crate::models::contact::{ContactRequest, ContactResponse, ContactSubmission};
use crate::store::DocumentStore;

pub const CONFIRMATION_MESSAGE: &str = "Thanks for reaching out! I'll get back to you soon.";

/// Upper bound on submissions returned to the admin listing.
pub const ADMIN_LIST_LIMIT: i64 = 100;

pub async fn submit_contact(
    store: &dyn DocumentStore,
    request: &ContactRequest,
) -> Result<ContactResponse, AppError> {
    validate_request_shape(request)?;

    let name = sanitize_text(&request.name);
    let email = normalize_email(&request.email);
    let message = sanitize_text(&request.message);

    if let Err(e) = validate_sanitized(&name, &email, &message) {
        warn!("Rejected contact submission: {e}");
        return Err(e);
    }

    let submission = ContactSubmission::new(name, email, message);
    store.insert_contact(&submission).await?;

    info!("Stored contact submission {}", submission.id);
    Ok(ContactResponse {
        success: true,
        message: CONFIRMATION_MESSAGE.to_string(),
        id: Some(submission.id.to_string()),
    })
}

/// Newest submissions first, capped at `ADMIN_LIST_LIMIT`.
pub async fn list_recent_contacts(
    store: &dyn DocumentStore,
) -> Result<Vec<ContactSubmission>, AppError> {
    Ok(store.recent_contacts(ADMIN_LIST_LIMIT).await?)
}
