//! Prompt log entity: one row per served suggestion request.

use chrono::{DateTime, Utc};

/// A persisted record of one suggestion request and its result.
///
/// Rows are append-only; the service never updates or deletes them.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptLog {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub idea: String,
    pub suggestions: Vec<String>,
}

/// Input data for appending a prompt log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromptLog {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub idea: String,
    pub suggestions: Vec<String>,
}

impl NewPromptLog {
    pub fn new(
        ip: Option<String>,
        user_agent: Option<String>,
        idea: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            ip,
            user_agent,
            idea: idea.into(),
            suggestions,
        }
    }
}
