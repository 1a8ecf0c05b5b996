//! Debate list filtering
//!
//! Translates the optional `speaker` and `q` query parameters into a SQL
//! WHERE fragment plus bind values. User input is always bound, never
//! interpolated into the statement text.

/// Filter over the debates table
#[derive(Debug, Default, Clone)]
pub struct DebateFilter {
    speaker: Option<String>,
    q: Option<String>,
}

impl DebateFilter {
    /// Build from raw query parameters; empty strings are treated as
    /// absent
    pub fn new(speaker: Option<String>, q: Option<String>) -> Self {
        Self {
            speaker: speaker.filter(|s| !s.is_empty()),
            q: q.filter(|q| !q.is_empty()),
        }
    }

    /// WHERE fragment (without the keyword) and its bind values, or
    /// `None` when the filter matches every record.
    ///
    /// `speaker` is an exact match; `q` is a substring match over title
    /// OR content. SQLite's LIKE is case-insensitive for ASCII, which is
    /// the behavior the search contract asks for.
    pub fn where_clause(&self) -> Option<(String, Vec<String>)> {
        let mut conditions = Vec::new();
        let mut binds = Vec::new();

        if let Some(speaker) = &self.speaker {
            conditions.push("speaker = ?".to_string());
            binds.push(speaker.clone());
        }

        if let Some(q) = &self.q {
            let pattern = format!("%{}%", escape_like(q));
            conditions
                .push("(title LIKE ? ESCAPE '\\' OR content LIKE ? ESCAPE '\\')".to_string());
            binds.push(pattern.clone());
            binds.push(pattern);
        }

        if conditions.is_empty() {
            None
        } else {
            Some((conditions.join(" AND "), binds))
        }
    }
}

/// Escape LIKE metacharacters so the search term matches literally
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
