//! PostgreSQL implementation of prompt log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{NewPromptLog, PromptLog};
use crate::domain::repositories::PromptLogRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `prompt_log` table.
///
/// Connections are checked out of the shared pool per query and returned when
/// the query future completes or is dropped.
pub struct PgPromptLogRepository {
    pool: Arc<PgPool>,
}

impl PgPromptLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PromptLogRow {
    id: i64,
    created_at: DateTime<Utc>,
    ip: Option<String>,
    user_agent: Option<String>,
    idea: String,
    suggestions: Json<Vec<String>>,
}

impl From<PromptLogRow> for PromptLog {
    fn from(row: PromptLogRow) -> Self {
        PromptLog {
            id: row.id,
            created_at: row.created_at,
            ip: row.ip,
            user_agent: row.user_agent,
            idea: row.idea,
            suggestions: row.suggestions.0,
        }
    }
}

#[async_trait]
impl PromptLogRepository for PgPromptLogRepository {
    async fn create(&self, entry: NewPromptLog) -> Result<PromptLog, AppError> {
        let row = sqlx::query_as::<_, PromptLogRow>(
            r#"
            INSERT INTO prompt_log (ip, user_agent, idea, suggestions)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at, ip, user_agent, idea, suggestions
            "#,
        )
        .bind(entry.ip)
        .bind(entry.user_agent)
        .bind(entry.idea)
        .bind(Json(entry.suggestions))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<PromptLog>, AppError> {
        let rows = sqlx::query_as::<_, PromptLogRow>(
            r#"
            SELECT id, created_at, ip, user_agent, idea, suggestions
            FROM prompt_log
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PromptLog::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM prompt_log")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
