//! PostgreSQL repository implementations.
//!
//! # Repositories
//!
//! - [`PgPromptLogRepository`] - Append-only prompt log

pub mod pg_prompt_log_repository;

pub use pg_prompt_log_repository::PgPromptLogRepository;
