// src/services/resolver.rs
//
// Card Resolver - orchestrates one reference lookup
//
// CRITICAL RULES:
// - One outbound catalog call per reference, no retries
// - Never panics on a lookup failure; returns a typed outcome
// - Stateless: nothing is cached or shared between calls

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::domain::{Reference, ResolutionOutcome};
use crate::error::AppError;
use crate::services::CandidateRanker;

pub struct CardResolver {
    catalog: Arc<dyn CatalogClient>,
    ranker: CandidateRanker,
}

impl CardResolver {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self {
            catalog,
            ranker: CandidateRanker,
        }
    }

    /// Resolve one raw reference string into an outcome.
    ///
    /// The reference is split into name + optional edition hint; only the
    /// name participates in the catalog query and ranking. The original-case
    /// raw reference travels with the outcome for downstream formatting.
    pub async fn resolve(&self, raw: &str) -> ResolutionOutcome {
        let reference = Reference::parse(raw);

        let candidates = match self.catalog.cards_by_name(reference.name()).await {
            Ok(cards) => cards,
            Err(AppError::NotFound) => {
                return ResolutionOutcome::NotFound {
                    reference,
                    reason: "catalog reported no card with that name".to_string(),
                };
            }
            Err(err) => {
                return ResolutionOutcome::TransportError {
                    reference,
                    reason: err.to_string(),
                };
            }
        };

        if candidates.is_empty() {
            return ResolutionOutcome::NotFound {
                reference,
                reason: "catalog returned zero candidates".to_string(),
            };
        }

        let card = self.ranker.rank(&candidates, reference.name()).clone();
        ResolutionOutcome::Found { card, reference }
    }
}
