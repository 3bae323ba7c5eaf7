//! Core business entities.
//!
//! - [`PromptLog`] / [`NewPromptLog`] - persisted request log
//! - [`AvailabilityVerdict`] - registrar answer for a single domain

pub mod availability;
pub mod prompt_log;

pub use availability::AvailabilityVerdict;
pub use prompt_log::{NewPromptLog, PromptLog};
