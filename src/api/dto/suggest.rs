//! DTOs for the domain suggestion endpoint.

use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Minimum idea length after trimming.
pub const MIN_IDEA_LENGTH: usize = 5;
/// Maximum idea length after trimming.
pub const MAX_IDEA_LENGTH: usize = 1000;

/// Request for domain suggestions.
///
/// The response is a plain JSON array of up to ten domain names.
#[derive(Debug, Deserialize, Validate)]
pub struct IdeaRequest {
    /// Free-text description of the startup idea.
    #[validate(custom(function = "validate_idea"))]
    pub idea: String,
}

impl IdeaRequest {
    /// The idea with surrounding whitespace removed.
    pub fn trimmed_idea(&self) -> &str {
        self.idea.trim()
    }
}

fn validate_idea(idea: &str) -> Result<(), ValidationError> {
    let length = idea.trim().chars().count();

    if length < MIN_IDEA_LENGTH {
        return Err(ValidationError::new("too_short")
            .with_message(Cow::Borrowed("Idea description too short.")));
    }
    if length > MAX_IDEA_LENGTH {
        return Err(ValidationError::new("too_long")
            .with_message(Cow::Borrowed("Idea description too long.")));
    }

    Ok(())
}
