//! Domain suggestion orchestration.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::gateways::{AvailabilityOracle, SuggestionSource};
use crate::error::AppError;

/// Limits applied to one suggestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionPolicy {
    /// Number of available domains to collect before stopping.
    pub target: usize,
    /// Maximum number of distinct candidates considered per request.
    pub ceiling: usize,
    /// Number of candidates requested from the AI source per round.
    pub batch_size: usize,
}

impl Default for SuggestionPolicy {
    fn default() -> Self {
        Self {
            target: 10,
            ceiling: 200,
            batch_size: 10,
        }
    }
}

/// Result of one orchestration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionOutcome {
    /// Available domains in the order they were confirmed.
    pub domains: Vec<String>,
    /// Number of AI rounds performed.
    pub rounds: usize,
    /// Size of the seen-set when the loop ended.
    pub candidates_seen: usize,
}

/// Collects available domain names for an idea.
///
/// Alternates between the AI [`SuggestionSource`] and the registrar
/// [`AvailabilityOracle`] until enough available domains are collected, the
/// candidate ceiling is reached, or a round yields nothing new.
pub struct SuggestionService<S: SuggestionSource + ?Sized, O: AvailabilityOracle + ?Sized> {
    source: Arc<S>,
    oracle: Arc<O>,
    policy: SuggestionPolicy,
}

impl<S: SuggestionSource + ?Sized, O: AvailabilityOracle + ?Sized> SuggestionService<S, O> {
    /// Creates a new suggestion service.
    pub fn new(source: Arc<S>, oracle: Arc<O>, policy: SuggestionPolicy) -> Self {
        Self {
            source,
            oracle,
            policy,
        }
    }

    pub fn policy(&self) -> SuggestionPolicy {
        self.policy
    }

    /// Reports whether both upstreams have their credentials.
    ///
    /// The registrar is checked first.
    pub fn ensure_configured(&self) -> Result<(), AppError> {
        self.ensure_oracle_configured()?;
        self.ensure_source_configured()
    }

    pub fn ensure_source_configured(&self) -> Result<(), AppError> {
        self.source.ensure_configured()
    }

    pub fn ensure_oracle_configured(&self) -> Result<(), AppError> {
        self.oracle.ensure_configured()
    }

    /// Returns up to `policy.target` distinct, available domains for `idea`.
    ///
    /// `idea` is expected to be validated and trimmed by the caller.
    ///
    /// # Algorithm
    ///
    /// Each round asks the AI source for a batch, keeps the candidates not seen
    /// before (recording them as seen right away), sends those to the registrar
    /// in one bulk request, and appends the available ones in response order.
    /// Verdicts beyond the target are dropped, not carried over.
    ///
    /// # Errors
    ///
    /// - [`AppError::Configuration`] before any network call when either
    ///   upstream lacks credentials
    /// - [`AppError::Gateway`] when any upstream call fails; no partial result
    ///   is returned
    pub async fn suggest(&self, idea: &str) -> Result<SuggestionOutcome, AppError> {
        self.ensure_configured()?;

        let SuggestionPolicy {
            target,
            ceiling,
            batch_size,
        } = self.policy;

        let mut collected: Vec<String> = Vec::with_capacity(target);
        let mut seen: HashSet<String> = HashSet::new();
        let mut rounds = 0;

        while collected.len() < target && seen.len() < ceiling {
            rounds += 1;
            let batch = self.source.suggest(idea, batch_size).await?;

            let mut fresh = Vec::with_capacity(batch.len());
            for candidate in batch {
                if seen.len() >= ceiling {
                    break;
                }
                if seen.insert(candidate.clone()) {
                    fresh.push(candidate);
                }
            }

            metrics::counter!("suggest_rounds_total").increment(1);
            metrics::counter!("suggest_candidates_total").increment(fresh.len() as u64);

            if fresh.is_empty() {
                debug!(round = rounds, "No new candidates, stopping");
                break;
            }

            let verdicts = self.oracle.check(&fresh).await?;

            for verdict in verdicts {
                if collected.len() >= target {
                    break;
                }
                if !verdict.available {
                    continue;
                }
                // Registrars may echo a different case; keep the submitted spelling.
                let Some(submitted) = fresh
                    .iter()
                    .find(|candidate| candidate.eq_ignore_ascii_case(&verdict.domain))
                else {
                    continue;
                };
                if !collected.contains(submitted) {
                    metrics::counter!("suggest_available_total").increment(1);
                    collected.push(submitted.clone());
                }
            }

            debug!(
                round = rounds,
                submitted = fresh.len(),
                collected = collected.len(),
                seen = seen.len(),
                "Suggestion round finished"
            );
        }

        metrics::histogram!("suggest_result_size").record(collected.len() as f64);
        info!(
            rounds,
            candidates_seen = seen.len(),
            found = collected.len(),
            "Domain suggestion finished"
        );

        Ok(SuggestionOutcome {
            domains: collected,
            rounds,
            candidates_seen: seen.len(),
        })
    }
}
