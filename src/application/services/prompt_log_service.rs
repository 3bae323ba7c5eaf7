//! Prompt log recording and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{NewPromptLog, PromptLog};
use crate::domain::repositories::PromptLogRepository;
use crate::error::AppError;

/// Largest page returned by [`PromptLogService::recent`].
pub const MAX_RECENT_LIMIT: i64 = 100;

/// Service for the append-only request log.
///
/// Recording can be switched off at construction time; reads always go to
/// the repository.
pub struct PromptLogService<R: PromptLogRepository + ?Sized> {
    repository: Arc<R>,
    enabled: bool,
}

impl<R: PromptLogRepository + ?Sized> PromptLogService<R> {
    /// Creates a new prompt log service.
    pub fn new(repository: Arc<R>, enabled: bool) -> Self {
        Self {
            repository,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Appends an entry. Returns `Ok(None)` without touching the repository
    /// when logging is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record(&self, entry: NewPromptLog) -> Result<Option<PromptLog>, AppError> {
        if !self.enabled {
            return Ok(None);
        }

        let created = self.repository.create(entry).await?;
        tracing::debug!(id = created.id, "Prompt log entry stored");
        Ok(Some(created))
    }

    /// Returns the newest entries. `limit` is clamped to `1..=100`.
    pub async fn recent(&self, limit: i64) -> Result<Vec<PromptLog>, AppError> {
        self.repository
            .list_recent(limit.clamp(1, MAX_RECENT_LIMIT))
            .await
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks datastore connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPromptLogRepository;
    use chrono::Utc;
    use mockall::predicate::eq;
    use serde_json::json;

    fn stored(id: i64, entry: NewPromptLog) -> PromptLog {
        PromptLog {
            id,
            created_at: Utc::now(),
            ip: entry.ip,
            user_agent: entry.user_agent,
            idea: entry.idea,
            suggestions: entry.suggestions,
        }
    }

    fn sample_entry() -> NewPromptLog {
        NewPromptLog::new(
            Some("198.51.100.4".to_string()),
            Some("Mozilla/5.0".to_string()),
            "meal planning app",
            vec!["mealmap.io".to_string(), "platewise.com".to_string()],
        )
    }

    #[tokio::test]
    async fn test_record_when_enabled() {
        let mut repo = MockPromptLogRepository::new();
        repo.expect_create()
            .with(eq(sample_entry()))
            .times(1)
            .returning(|entry| Ok(stored(1, entry)));

        let service = PromptLogService::new(Arc::new(repo), true);
        let created = service.record(sample_entry()).await.unwrap().unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.idea, "meal planning app");
        assert_eq!(created.suggestions.len(), 2);
    }

    #[tokio::test]
    async fn test_record_when_disabled_skips_repository() {
        let mut repo = MockPromptLogRepository::new();
        repo.expect_create().never();

        let service = PromptLogService::new(Arc::new(repo), false);
        let created = service.record(sample_entry()).await.unwrap();

        assert!(created.is_none());
        assert!(!service.is_enabled());
    }

    #[tokio::test]
    async fn test_record_propagates_database_error() {
        let mut repo = MockPromptLogRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = PromptLogService::new(Arc::new(repo), true);
        let result = service.record(sample_entry()).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_recent_clamps_limit() {
        let mut repo = MockPromptLogRepository::new();
        repo.expect_list_recent()
            .with(eq(100))
            .times(1)
            .returning(|_| Ok(vec![]));
        repo.expect_list_recent()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = PromptLogService::new(Arc::new(repo), true);

        assert!(service.recent(5_000).await.unwrap().is_empty());
        assert!(service.recent(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_count_and_health_check() {
        let mut repo = MockPromptLogRepository::new();
        repo.expect_count().returning(|| Ok(42));
        repo.expect_ping().returning(|| Ok(()));

        let service = PromptLogService::new(Arc::new(repo), true);

        assert_eq!(service.count().await.unwrap(), 42);
        assert!(service.health_check().await.is_ok());
    }
}
