//! Document store seam.
//!
//! The service needs four primitives from its store: read the singleton
//! portfolio document, upsert-replace it, append a new document, and list
//! documents sorted and limited. `DocumentStore` names exactly those, so the
//! Postgres backend can be swapped for the in-memory one in tests.
//!
//! `AppState` carries the store as `Arc<dyn DocumentStore>`.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::contact::ContactSubmission;
use crate::models::status::StatusCheck;

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(e.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the singleton portfolio document, or `None` before seeding.
    async fn find_portfolio(&self) -> Result<Option<Value>, StoreError>;

    /// Atomically inserts or fully replaces the singleton portfolio document.
    async fn replace_portfolio(&self, document: &Value) -> Result<(), StoreError>;

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError>;

    /// Most recent submissions first, at most `limit` of them.
    async fn recent_contacts(&self, limit: i64) -> Result<Vec<ContactSubmission>, StoreError>;

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError>;

    /// Oldest first, at most `limit` of them.
    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError>;
}
