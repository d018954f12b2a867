use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::portfolio::{PortfolioDocument, Project, Skill};
use crate::portfolio::{seed, service};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/portfolio
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
) -> Result<Json<PortfolioDocument>, AppError> {
    Ok(Json(service::get_portfolio(state.store.as_ref()).await?))
}

/// GET /api/portfolio/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(service::get_skills(state.store.as_ref()).await?))
}

/// GET /api/portfolio/projects
pub async fn handle_get_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(service::get_projects(state.store.as_ref()).await?))
}

/// POST /api/admin/refresh-portfolio
pub async fn handle_refresh_portfolio(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    seed::force_refresh(state.store.as_ref()).await?;
    Ok(Json(RefreshResponse {
        success: true,
        message: "Portfolio data refreshed successfully".to_string(),
    }))
}
