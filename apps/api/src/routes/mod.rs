pub mod root;
pub mod status;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::errors::AppError;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(root::root_handler))
        .route("/api/", get(root::root_handler))
        // Portfolio content
        .route("/api/portfolio", get(portfolio::handle_get_portfolio))
        .route("/api/portfolio/skills", get(portfolio::handle_get_skills))
        .route("/api/portfolio/projects", get(portfolio::handle_get_projects))
        // Contact intake
        .route("/api/contact", post(contact::handle_submit_contact))
        // Admin (unauthenticated, single-purpose)
        .route("/api/admin/contacts", get(contact::handle_list_contacts))
        .route(
            "/api/admin/refresh-portfolio",
            post(portfolio::handle_refresh_portfolio),
        )
        // Legacy status checks
        .route(
            "/api/status",
            get(status::list_status_checks).post(status::create_status_check),
        )
        .fallback(not_found)
        .with_state(state)
}
