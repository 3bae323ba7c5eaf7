//! Business logic services for the application layer.

pub mod prompt_log_service;
pub mod suggestion_service;

pub use prompt_log_service::PromptLogService;
pub use suggestion_service::{SuggestionOutcome, SuggestionPolicy, SuggestionService};

use crate::domain::gateways::{AvailabilityOracle, SuggestionSource};
use crate::domain::repositories::PromptLogRepository;

/// Suggestion service over type-erased gateways, as stored in [`crate::AppState`].
pub type DynSuggestionService = SuggestionService<dyn SuggestionSource, dyn AvailabilityOracle>;

/// Prompt log service over a type-erased repository.
pub type DynPromptLogService = PromptLogService<dyn PromptLogRepository>;
