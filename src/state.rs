//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{DynPromptLogService, DynSuggestionService};

/// Services shared by all requests.
///
/// Cloning is cheap; every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub suggestion_service: Arc<DynSuggestionService>,
    pub prompt_log_service: Arc<DynPromptLogService>,
}

impl AppState {
    pub fn new(
        suggestion_service: Arc<DynSuggestionService>,
        prompt_log_service: Arc<DynPromptLogService>,
    ) -> Self {
        Self {
            suggestion_service,
            prompt_log_service,
        }
    }
}
