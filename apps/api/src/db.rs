use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

/// Creates and returns a PostgreSQL connection pool against `DB_NAME`.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    info!("Connecting to PostgreSQL database '{}'...", config.db_name);

    let options = PgConnectOptions::from_str(&config.database_url)
        .context("DATABASE_URL is not a valid PostgreSQL connection string")?
        .database(&config.db_name);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the backing tables if they do not exist yet. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS portfolio_documents (
            slot SMALLINT PRIMARY KEY CHECK (slot = 1),
            data JSONB NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contact_submissions (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            message TEXT NOT NULL,
            submitted_at TIMESTAMPTZ NOT NULL,
            status TEXT NOT NULL DEFAULT 'new',
            created_seq BIGSERIAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Tables created before the tie-breaker column existed.
    sqlx::query("ALTER TABLE contact_submissions ADD COLUMN IF NOT EXISTS created_seq BIGSERIAL")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS contact_submissions_recent_idx \
         ON contact_submissions (submitted_at DESC, created_seq DESC)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS status_checks (
            id UUID PRIMARY KEY,
            client_name TEXT NOT NULL,
            "timestamp" TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema ready");
    Ok(())
}
