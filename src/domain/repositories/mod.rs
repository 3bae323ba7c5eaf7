//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.

pub mod prompt_log_repository;

pub use prompt_log_repository::PromptLogRepository;

#[cfg(test)]
pub use prompt_log_repository::MockPromptLogRepository;
