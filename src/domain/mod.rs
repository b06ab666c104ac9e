// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// Pure value objects only. Everything here is constructed fresh per incoming
// request and discarded after the response is produced: no cache, no shared
// mutable card store, no cross-request identity.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod card;
pub mod reference;
pub mod resolution;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use card::{Card, CardPrinting};
pub use reference::Reference;
pub use resolution::ResolutionOutcome;
