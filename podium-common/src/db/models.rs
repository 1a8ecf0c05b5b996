//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Archived debate record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Debate {
    pub id: String,
    pub title: String,
    pub speaker: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub language: String,
    pub party: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for inserting a debate
#[derive(Debug, Clone)]
pub struct NewDebate {
    pub title: String,
    pub speaker: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub language: String,
    pub party: Option<String>,
}

/// Media attachment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Audio,
    Youtube,
}

impl MediaType {
    /// Parse a raw request value; comparison is case-insensitive
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "video" => Some(MediaType::Video),
            "audio" => Some(MediaType::Audio),
            "youtube" => Some(MediaType::Youtube),
            _ => None,
        }
    }
}

/// Archived media record (video/audio/YouTube link)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Media {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub media_type: MediaType,
    pub uploaded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for inserting a media record
#[derive(Debug, Clone)]
pub struct NewMedia {
    pub title: String,
    pub url: String,
    pub media_type: MediaType,
}

/// Speaker roster entry
///
/// Part of the data model but not yet exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Speaker {
    pub id: String,
    pub name: String,
    pub party: Option<String>,
    pub constituency: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_parses_known_values() {
        assert_eq!(MediaType::parse("video"), Some(MediaType::Video));
        assert_eq!(MediaType::parse("AUDIO"), Some(MediaType::Audio));
        assert_eq!(MediaType::parse("YouTube"), Some(MediaType::Youtube));
    }

    #[test]
    fn media_type_rejects_unknown_values() {
        assert_eq!(MediaType::parse("slideshow"), None);
        assert_eq!(MediaType::parse(""), None);
    }
}
