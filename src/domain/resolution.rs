// src/domain/resolution.rs
//
// Resolution Value Objects
//
// Pure, immutable data structures representing the outcome of resolving one
// reference. No partial/ambiguous state is retained between requests; each
// resolution is independent and stateless.

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Reference};

/// The outcome of attempting to resolve one card reference.
///
/// `NotFound` (the catalog explicitly reports zero matches) and
/// `TransportError` (network failure, non-success status, undecodable body)
/// are distinct so the gateway can log and react to them appropriately, even
/// though today the user-visible feedback is the same reaction glyph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResolutionOutcome {
    /// A single best-matching card was found
    Found { card: Card, reference: Reference },

    /// The catalog reported zero matches for the reference
    NotFound { reference: Reference, reason: String },

    /// The catalog could not be queried or its response was unusable
    TransportError { reference: Reference, reason: String },
}

impl ResolutionOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ResolutionOutcome::Found { .. })
    }

    /// Extracts the resolved card if the lookup succeeded
    pub fn card(&self) -> Option<&Card> {
        match self {
            ResolutionOutcome::Found { card, .. } => Some(card),
            _ => None,
        }
    }

    /// The reference this outcome was produced for
    pub fn reference(&self) -> &Reference {
        match self {
            ResolutionOutcome::Found { reference, .. }
            | ResolutionOutcome::NotFound { reference, .. }
            | ResolutionOutcome::TransportError { reference, .. } => reference,
        }
    }
}
