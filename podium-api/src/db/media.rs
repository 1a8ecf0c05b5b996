//! Media table queries

use chrono::Utc;
use podium_common::db::models::{Media, NewMedia};
use podium_common::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Insert a validated media record and return the stored record
///
/// `uploaded_at` defaults to the creation time.
pub async fn insert(pool: &SqlitePool, new: NewMedia) -> Result<Media> {
    let now = Utc::now();
    let media = Media {
        id: Uuid::new_v4().to_string(),
        title: new.title,
        url: new.url,
        media_type: new.media_type,
        uploaded_at: now,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO media (id, title, url, type, uploaded_at, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&media.id)
    .bind(&media.title)
    .bind(&media.url)
    .bind(media.media_type)
    .bind(media.uploaded_at)
    .bind(media.created_at)
    .bind(media.updated_at)
    .execute(pool)
    .await?;

    Ok(media)
}

/// List all media, latest upload first
pub async fn list(pool: &SqlitePool) -> Result<Vec<Media>> {
    Ok(
        sqlx::query_as::<_, Media>("SELECT * FROM media ORDER BY uploaded_at DESC")
            .fetch_all(pool)
            .await?,
    )
}
