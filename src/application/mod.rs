//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::suggestion_service::SuggestionService`] - AI suggestion and availability loop
//! - [`services::prompt_log_service::PromptLogService`] - Request log recording and queries

pub mod services;
