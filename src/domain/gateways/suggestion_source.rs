//! Source of candidate domain names.

use crate::error::AppError;
use async_trait::async_trait;

/// Proposes candidate domain names for a free-text idea.
///
/// # Implementations
///
/// - [`crate::infrastructure::gateways::GeminiClient`] - Google Gemini
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Fails with [`AppError::Configuration`] when credentials are missing.
    ///
    /// Must not perform any I/O.
    fn ensure_configured(&self) -> Result<(), AppError>;

    /// Asks for `count` candidates for `idea`.
    ///
    /// Returns trimmed, non-empty tokens in the order the upstream produced
    /// them. The list may be empty and may contain duplicates.
    ///
    /// # Errors
    ///
    /// - [`AppError::Configuration`] if credentials are missing
    /// - [`AppError::Gateway`] on transport errors, non-success responses or
    ///   malformed output
    async fn suggest(&self, idea: &str, count: usize) -> Result<Vec<String>, AppError>;
}
