//! Registrar availability lookups.

use crate::domain::entities::AvailabilityVerdict;
use crate::error::AppError;
use async_trait::async_trait;

/// Reports whether domains are currently registrable.
///
/// # Implementations
///
/// - [`crate::infrastructure::gateways::GoDaddyClient`] - GoDaddy domains API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvailabilityOracle: Send + Sync {
    /// Fails with [`AppError::Configuration`] when credentials are missing.
    ///
    /// Must not perform any I/O.
    fn ensure_configured(&self) -> Result<(), AppError>;

    /// Checks all `domains` in a single bulk request.
    ///
    /// Verdicts are returned in the order the upstream produced them.
    ///
    /// # Errors
    ///
    /// - [`AppError::Configuration`] if credentials are missing
    /// - [`AppError::Gateway`] on transport errors, timeouts, non-success
    ///   responses or malformed bodies
    async fn check(&self, domains: &[String]) -> Result<Vec<AvailabilityVerdict>, AppError>;
}
