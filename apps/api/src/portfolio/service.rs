//! Portfolio store accessor.
//!
//! `get_portfolio` self-heals: an empty store is seeded and re-read, so a
//! reachable store never answers "no portfolio". The field projections are
//! lenient instead and answer `[]` when the document or field is missing.

use anyhow::anyhow;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::models::portfolio::{PortfolioDocument, Project, Skill};
use crate::portfolio::seed::{ensure_seeded, SeedOutcome};
use crate::store::{DocumentStore, StoreError};

pub async fn get_portfolio(store: &dyn DocumentStore) -> Result<PortfolioDocument, AppError> {
    let document = match ensure_seeded(store).await? {
        SeedOutcome::AlreadyPresent(doc) => doc,
        SeedOutcome::Seeded => store
            .find_portfolio()
            .await?
            .ok_or_else(|| anyhow!("portfolio document missing after seeding"))?,
    };
    serde_json::from_value(document).map_err(|e| {
        warn!(
            "Stored portfolio document is malformed ({e}); \
             POST /api/admin/refresh-portfolio restores the default"
        );
        AppError::from(StoreError::from(e))
    })
}

pub async fn get_skills(store: &dyn DocumentStore) -> Result<Vec<Skill>, AppError> {
    project_field(store, "skills").await
}

pub async fn get_projects(store: &dyn DocumentStore) -> Result<Vec<Project>, AppError> {
    project_field(store, "projects").await
}

async fn project_field<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    field: &str,
) -> Result<Vec<T>, AppError> {
    let Some(document) = store.find_portfolio().await? else {
        return Ok(Vec::new());
    };
    match document.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => Ok(serde_json::from_value(items.clone()).map_err(StoreError::from)?),
    }
}
