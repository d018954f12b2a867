use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::debug;

use crate::models::contact::ContactSubmission;
use crate::models::status::StatusCheck;
use crate::store::{DocumentStore, StoreError};

/// Fixed key of the singleton portfolio row.
const PORTFOLIO_SLOT: i16 = 1;

/// `created_seq` orders rows whose microsecond timestamps collide.
const RECENT_CONTACTS_SQL: &str = r#"
    SELECT id, name, email, message, submitted_at, status
    FROM contact_submissions
    ORDER BY submitted_at DESC, created_seq DESC
    LIMIT $1
"#;

/// PostgreSQL-backed document store. JSONB holds the portfolio document;
/// contacts and status checks are plain append-only rows.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Closes every pooled connection. Called once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find_portfolio(&self) -> Result<Option<Value>, StoreError> {
        let data: Option<Value> =
            sqlx::query_scalar("SELECT data FROM portfolio_documents WHERE slot = $1")
                .bind(PORTFOLIO_SLOT)
                .fetch_optional(&self.pool)
                .await?;
        Ok(data)
    }

    async fn replace_portfolio(&self, document: &Value) -> Result<(), StoreError> {
        // Replace, never insert-twice: concurrent seeders converge on one row.
        sqlx::query(
            r#"
            INSERT INTO portfolio_documents (slot, data, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (slot) DO UPDATE
                SET data = EXCLUDED.data,
                    updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(PORTFOLIO_SLOT)
        .bind(document)
        .execute(&self.pool)
        .await?;

        debug!("Upserted portfolio document");
        Ok(())
    }

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO contact_submissions (id, name, email, message, submitted_at, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(submission.id)
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .bind(submission.submitted_at)
        .bind(&submission.status)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn recent_contacts(&self, limit: i64) -> Result<Vec<ContactSubmission>, StoreError> {
        Ok(sqlx::query_as::<_, ContactSubmission>(RECENT_CONTACTS_SQL)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError> {
        sqlx::query(r#"INSERT INTO status_checks (id, client_name, "timestamp") VALUES ($1, $2, $3)"#)
            .bind(check.id)
            .bind(&check.client_name)
            .bind(check.timestamp)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        Ok(sqlx::query_as::<_, StatusCheck>(
            r#"SELECT id, client_name, "timestamp" FROM status_checks ORDER BY "timestamp" ASC LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
}
