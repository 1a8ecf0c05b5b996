//! Request validation
//!
//! Pure checks turning raw request bodies into insertable records. The
//! first missing or invalid field wins; messages are client-facing and
//! stable (the frontend matches on them).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use podium_common::db::models::{MediaType, NewDebate, NewMedia};
use podium_common::Error;

use crate::api::debates::CreateDebateRequest;
use crate::api::media::CreateMediaRequest;

const DEFAULT_LANGUAGE: &str = "EN";

/// Validate a debate creation request
pub fn debate(req: CreateDebateRequest) -> Result<NewDebate, Error> {
    let title = required("title", req.title)?;
    let speaker = required("speaker", req.speaker)?;
    let raw_date = required("date", req.date)?;
    let content = required("content", req.content)?;

    let date = parse_iso_date(&raw_date)
        .ok_or_else(|| Error::InvalidInput("date must be ISO date string".to_string()))?;

    let language = req
        .language
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let party = req
        .party
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    Ok(NewDebate {
        title,
        speaker,
        date,
        content,
        language,
        party,
    })
}

/// Validate a media creation request
pub fn media(req: CreateMediaRequest) -> Result<NewMedia, Error> {
    let title = required("title", req.title)?;
    let url = required("url", req.url)?;
    let raw_type = required("type", req.media_type)?;

    if !is_http_url(&url) {
        return Err(Error::InvalidInput("url must be http(s)".to_string()));
    }

    let media_type = MediaType::parse(&raw_type).ok_or_else(|| {
        Error::InvalidInput("type must be one of video, audio, youtube".to_string())
    })?;

    Ok(NewMedia {
        title,
        url,
        media_type,
    })
}

/// Whitespace-only values count as missing
fn required(field: &str, value: Option<String>) -> Result<String, Error> {
    let trimmed = value.as_deref().map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        Err(Error::InvalidInput(format!("{} is required", field)))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS` (assumed UTC), or a bare
/// `YYYY-MM-DD` (midnight UTC)
fn parse_iso_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}

fn is_http_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
