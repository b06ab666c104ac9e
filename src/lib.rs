// src/lib.rs
// Manabot - chat bot that resolves card references against a remote catalog
//
// Architecture:
// - Domain-centric: card/reference/outcome value objects carry no behavior
//   beyond their own invariants
// - Stateless: every lookup is constructed fresh per request and discarded;
//   no cache, no shared mutable card store
// - Explicit: configuration is a struct built once at startup, not globals
// - Seams: the catalog and the chat platform sit behind traits

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod gateway;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Values
// ============================================================================

pub use domain::{Card, CardPrinting, Reference, ResolutionOutcome};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::Config;

// ============================================================================
// PUBLIC API - Catalog Integration
// ============================================================================

pub use catalog::{CatalogClient, HttpCatalogClient};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CandidateRanker, CardResolver, EditionSelector, ReferenceExtractor};

// ============================================================================
// PUBLIC API - Formatting
// ============================================================================

pub use format::{ManaTextFormatter, ResponseFormatter, ResponseMode, TypeLineFormatter};

// ============================================================================
// PUBLIC API - Gateway
// ============================================================================

pub use gateway::{
    shutdown_channel,
    ChatTransport,
    ConsoleSession,
    ConsoleTransport,
    DisconnectHandle,
    IncomingMessage,
    MessageHandler,
    ShutdownSignal,
};
