//! Registrar availability verdicts.

/// Availability of one domain as reported by the registrar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityVerdict {
    pub domain: String,
    pub available: bool,
}

impl AvailabilityVerdict {
    pub fn new(domain: impl Into<String>, available: bool) -> Self {
        Self {
            domain: domain.into(),
            available,
        }
    }
}
