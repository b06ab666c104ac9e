// src/services/resolver_tests.rs
//
// UNIT TESTS: Card Resolver
//
// PURPOSE:
// - Prove the outcome classification: Found vs NotFound vs TransportError
// - Prove the edition hint never leaks into the catalog query
// - Prove one failed lookup is terminal (single catalog call, no retries)

use std::sync::Arc;

use crate::catalog::MockCatalogClient;
use crate::domain::{Card, CardPrinting};
use crate::error::AppError;
use crate::services::CardResolver;

fn bolt(name: &str) -> Card {
    Card {
        name: name.to_string(),
        cost: "{R}".to_string(),
        text: "Lightning Bolt deals 3 damage to any target.".to_string(),
        power: String::new(),
        toughness: String::new(),
        types: vec!["Instant".to_string()],
        printings: vec![CardPrinting {
            set_id: "LEA".to_string(),
            set: "Limited Edition Alpha".to_string(),
            number: "161".to_string(),
            multiverse_id: 209,
            image_url: "https://img.example/209.jpg".to_string(),
            layout: "normal".to_string(),
            price: None,
        }],
    }
}

#[tokio::test]
async fn test_resolve_found_ranks_candidates() {
    let mut catalog = MockCatalogClient::new();
    let candidates = vec![bolt("Lightning Bolts"), bolt("Lightning Bolt")];
    catalog
        .expect_cards_by_name()
        .times(1)
        .withf(|name| name == "Lightning Bolt")
        .returning(move |_| Ok(candidates.clone()));

    let resolver = CardResolver::new(Arc::new(catalog));
    let outcome = resolver.resolve("Lightning Bolt").await;

    assert!(outcome.is_found());
    assert_eq!(outcome.card().unwrap().name, "Lightning Bolt");
    assert_eq!(outcome.reference().raw(), "Lightning Bolt");
}

#[tokio::test]
async fn test_resolve_queries_by_name_without_edition_hint() {
    let mut catalog = MockCatalogClient::new();
    catalog
        .expect_cards_by_name()
        .times(1)
        .withf(|name| name == "Lightning Bolt")
        .returning(move |_| Ok(vec![bolt("Lightning Bolt")]));

    let resolver = CardResolver::new(Arc::new(catalog));
    let outcome = resolver.resolve("Lightning Bolt/LEA").await;

    assert!(outcome.is_found());
    assert_eq!(outcome.reference().edition_hint(), Some("LEA"));
    assert_eq!(outcome.reference().raw(), "Lightning Bolt/LEA");
}

#[tokio::test]
async fn test_resolve_catalog_404_is_not_found() {
    let mut catalog = MockCatalogClient::new();
    catalog
        .expect_cards_by_name()
        .times(1)
        .returning(|_| Err(AppError::NotFound));

    let resolver = CardResolver::new(Arc::new(catalog));
    let outcome = resolver.resolve("Blightning Strike").await;

    assert!(matches!(
        outcome,
        crate::domain::ResolutionOutcome::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_resolve_zero_candidates_is_not_found() {
    let mut catalog = MockCatalogClient::new();
    catalog
        .expect_cards_by_name()
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let resolver = CardResolver::new(Arc::new(catalog));
    let outcome = resolver.resolve("Nonexistent Card").await;

    assert!(matches!(
        outcome,
        crate::domain::ResolutionOutcome::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_resolve_network_failure_is_transport_error() {
    let mut catalog = MockCatalogClient::new();
    catalog
        .expect_cards_by_name()
        .times(1)
        .returning(|_| Err(AppError::Transport("connection refused".to_string())));

    let resolver = CardResolver::new(Arc::new(catalog));
    let outcome = resolver.resolve("Lightning Bolt").await;

    match outcome {
        crate::domain::ResolutionOutcome::TransportError { reason, reference } => {
            assert!(reason.contains("connection refused"));
            assert_eq!(reference.raw(), "Lightning Bolt");
        }
        other => panic!("expected TransportError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_decode_failure_is_transport_error() {
    // DecodeError is treated identically to TransportError by callers
    let mut catalog = MockCatalogClient::new();
    catalog
        .expect_cards_by_name()
        .times(1)
        .returning(|_| Err(AppError::Decode("unexpected token".to_string())));

    let resolver = CardResolver::new(Arc::new(catalog));
    let outcome = resolver.resolve("Lightning Bolt").await;

    assert!(matches!(
        outcome,
        crate::domain::ResolutionOutcome::TransportError { .. }
    ));
}
