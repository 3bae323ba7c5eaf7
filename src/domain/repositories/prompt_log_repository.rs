//! Repository trait for prompt log storage.

use crate::domain::entities::{NewPromptLog, PromptLog};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only storage for [`PromptLog`] entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPromptLogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_prompt_log.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromptLogRepository: Send + Sync {
    /// Appends a new entry. `id` and `created_at` are assigned by the database.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, entry: NewPromptLog) -> Result<PromptLog, AppError>;

    /// Returns up to `limit` entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<PromptLog>, AppError>;

    /// Counts all stored entries.
    async fn count(&self) -> Result<i64, AppError>;

    /// Performs a round-trip to the datastore.
    async fn ping(&self) -> Result<(), AppError>;
}
