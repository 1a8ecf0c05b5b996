//! Database initialization
//!
//! Builds the connection pool from the configured connection string and
//! brings up the schema. Safe to run on every startup; all DDL is
//! `CREATE TABLE IF NOT EXISTS`.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::info;

/// Connect to the database and ensure the schema exists
pub async fn init_database(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    info!("Connected to database");

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    // Wait briefly on a locked database instead of failing outright
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create all tables and indexes (idempotent)
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_debates_table(pool).await?;
    create_media_table(pool).await?;
    create_speakers_table(pool).await?;

    Ok(())
}

async fn create_debates_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS debates (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            speaker TEXT NOT NULL,
            date TIMESTAMP NOT NULL,
            content TEXT NOT NULL,
            language TEXT NOT NULL DEFAULT 'EN',
            party TEXT,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_debates_speaker ON debates(speaker)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_debates_created_at ON debates(created_at)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_media_table(pool: &SqlitePool) -> Result<()> {
    // The type enum is enforced by the validator; the CHECK is a second
    // line of defense for writes that bypass the API
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS media (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            type TEXT NOT NULL CHECK (type IN ('video', 'audio', 'youtube')),
            uploaded_at TIMESTAMP NOT NULL,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_media_uploaded_at ON media(uploaded_at)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_speakers_table(pool: &SqlitePool) -> Result<()> {
    // No endpoints expose speakers yet; the table backs upcoming
    // speaker management
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS speakers (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            party TEXT,
            constituency TEXT,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
