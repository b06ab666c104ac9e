// src/services/mod.rs
//
// Services Module - the reference-resolution pipeline

pub mod edition;
pub mod extractor;
pub mod ranker;
pub mod resolver;

#[cfg(test)]
mod resolver_tests;

pub use edition::EditionSelector;
pub use extractor::ReferenceExtractor;
pub use ranker::CandidateRanker;
pub use resolver::CardResolver;
