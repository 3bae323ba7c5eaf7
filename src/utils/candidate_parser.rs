//! Strict parsing of AI-generated candidate lists.
//!
//! The model is asked for `name.tld, name.tld, ...`. Tokens are split on commas
//! and trimmed; empty tokens are dropped. Any remaining token that is not a
//! syntactically valid domain name rejects the whole response.

use regex::Regex;
use std::sync::LazyLock;

/// Hostname labels separated by dots, ending in an alphabetic TLD.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$")
        .expect("domain regex is valid")
});

const MAX_DOMAIN_LENGTH: usize = 253;

/// Errors that can occur while parsing a candidate list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateParseError {
    #[error("malformed domain candidate: {0:?}")]
    InvalidDomain(String),
}

/// Splits a comma-separated candidate list.
///
/// Order is preserved and duplicates are kept; deduplication is the caller's
/// job.
///
/// # Errors
///
/// Returns [`CandidateParseError::InvalidDomain`] for the first token that is
/// not a valid domain name.
///
/// # Examples
///
/// ```
/// use domainly::utils::candidate_parser::parse_candidates;
///
/// let parsed = parse_candidates(" brewbox.com,  beanly.io ,,").unwrap();
/// assert_eq!(parsed, vec!["brewbox.com", "beanly.io"]);
/// ```
pub fn parse_candidates(text: &str) -> Result<Vec<String>, CandidateParseError> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if is_valid_domain(token) {
                Ok(token.to_string())
            } else {
                Err(CandidateParseError::InvalidDomain(token.to_string()))
            }
        })
        .collect()
}

/// Returns true if `candidate` looks like a registrable domain name.
pub fn is_valid_domain(candidate: &str) -> bool {
    candidate.len() <= MAX_DOMAIN_LENGTH && DOMAIN_REGEX.is_match(candidate)
}
