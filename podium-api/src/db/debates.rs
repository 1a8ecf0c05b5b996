//! Debate table queries

use chrono::Utc;
use podium_common::db::models::{Debate, NewDebate};
use podium_common::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::query::DebateFilter;

/// Insert a validated debate and return the stored record
pub async fn insert(pool: &SqlitePool, new: NewDebate) -> Result<Debate> {
    let now = Utc::now();
    let debate = Debate {
        id: Uuid::new_v4().to_string(),
        title: new.title,
        speaker: new.speaker,
        date: new.date,
        content: new.content,
        language: new.language,
        party: new.party,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO debates (id, title, speaker, date, content, language, party, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&debate.id)
    .bind(&debate.title)
    .bind(&debate.speaker)
    .bind(debate.date)
    .bind(&debate.content)
    .bind(&debate.language)
    .bind(&debate.party)
    .bind(debate.created_at)
    .bind(debate.updated_at)
    .execute(pool)
    .await?;

    Ok(debate)
}

/// List debates matching `filter`, newest first
pub async fn list(pool: &SqlitePool, filter: &DebateFilter) -> Result<Vec<Debate>> {
    let mut sql = String::from("SELECT * FROM debates");

    let binds = match filter.where_clause() {
        Some((clause, binds)) => {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
            binds
        }
        None => Vec::new(),
    };

    sql.push_str(" ORDER BY created_at DESC");

    let mut query = sqlx::query_as::<_, Debate>(&sql);
    for bind in &binds {
        query = query.bind(bind);
    }

    Ok(query.fetch_all(pool).await?)
}

/// Fetch one debate by id
pub async fn get(pool: &SqlitePool, id: &str) -> Result<Option<Debate>> {
    Ok(sqlx::query_as::<_, Debate>("SELECT * FROM debates WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?)
}

/// Delete one debate by id; returns whether a record existed
pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM debates WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
