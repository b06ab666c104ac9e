// src/catalog/mod.rs
//
// External Catalog Integration

pub mod client;

pub use client::{CatalogClient, HttpCatalogClient};

#[cfg(test)]
pub use client::MockCatalogClient;
