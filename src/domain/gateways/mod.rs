//! Gateway traits for the upstream services the orchestrator talks to.
//!
//! - [`SuggestionSource`] - generative model proposing candidate domains
//! - [`AvailabilityOracle`] - registrar reporting whether domains can be registered
//!
//! Implementations live in `crate::infrastructure::gateways`.

pub mod availability_oracle;
pub mod suggestion_source;

pub use availability_oracle::AvailabilityOracle;
pub use suggestion_source::SuggestionSource;

#[cfg(test)]
pub use availability_oracle::MockAvailabilityOracle;
#[cfg(test)]
pub use suggestion_source::MockSuggestionSource;
