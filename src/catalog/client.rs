// src/catalog/client.rs
//
// Card Catalog API Integration
//
// ARCHITECTURE:
// - HTTP client for the remote card catalog
// - Maps external data → internal domain values (NO domain mutation)
// - Used by CardResolver
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Returns domain value objects that services consume as-is
// - Handles all external API concerns (status codes, JSON shapes)
// - Every failure is classified: Transport vs NotFound vs Decode

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::{Card, CardPrinting};
use crate::error::{AppError, AppResult};

/// Seam between the resolution pipeline and the remote catalog.
///
/// Implementations construct the query, perform one request (no retries) and
/// deserialize the result list; search semantics belong to the catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// All cards whose name matches or fuzzily relates to `name`.
    /// 404 from the catalog maps to `AppError::NotFound`.
    async fn cards_by_name(&self, name: &str) -> AppResult<Vec<Card>>;

    /// Single best fuzzy match for `name` from the catalog's own matcher.
    async fn card_fuzzy(&self, name: &str) -> AppResult<Card>;

    /// Free-text search, optionally restricted to one set.
    async fn search<'a>(&self, query: &str, set: Option<&'a str>) -> AppResult<Vec<Card>>;
}

// ============================================================================
// WIRE SHAPES
// ============================================================================

#[derive(Debug, Deserialize)]
struct EditionDto {
    #[serde(default)]
    set_id: String,
    #[serde(default)]
    set: String,
    #[serde(default)]
    number: String,
    #[serde(default)]
    multiverse_id: u64,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    layout: String,
    #[serde(default)]
    price: Option<String>,
}

/// One card as the catalog serializes it. The list endpoints nest printings
/// under `editions`; single-printing endpoints expose `mana_cost`, `usd` and
/// `image_uri` directly on the card instead.
#[derive(Debug, Deserialize)]
struct CardDto {
    name: String,
    #[serde(default, alias = "mana_cost")]
    cost: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    power: String,
    #[serde(default)]
    toughness: String,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    editions: Vec<EditionDto>,

    // Alternate single-printing shape
    #[serde(default)]
    set_id: Option<String>,
    #[serde(default)]
    set: Option<String>,
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    multiverse_id: Option<u64>,
    #[serde(default)]
    layout: Option<String>,
    #[serde(default)]
    usd: Option<String>,
    #[serde(default)]
    image_uri: Option<String>,
}

/// Free-text search results arrive wrapped in a `Data` array.
#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(rename = "Data", default)]
    data: Vec<CardDto>,
}

fn map_edition(dto: EditionDto) -> CardPrinting {
    CardPrinting {
        set_id: dto.set_id,
        set: dto.set,
        number: dto.number,
        multiverse_id: dto.multiverse_id,
        image_url: dto.image_url,
        layout: dto.layout,
        price: dto.price,
    }
}

/// Map a wire card to the domain, upholding the "at least one printing"
/// invariant: single-printing shapes get their card-level fields folded into
/// a synthetic printing.
fn map_card(dto: CardDto) -> Card {
    let printings = if dto.editions.is_empty() {
        vec![CardPrinting {
            set_id: dto.set_id.unwrap_or_default(),
            set: dto.set.unwrap_or_default(),
            number: dto.number.unwrap_or_default(),
            multiverse_id: dto.multiverse_id.unwrap_or_default(),
            image_url: dto.image_uri.unwrap_or_default(),
            layout: dto.layout.unwrap_or_default(),
            price: dto.usd,
        }]
    } else {
        dto.editions.into_iter().map(map_edition).collect()
    };

    Card {
        name: dto.name,
        cost: dto.cost,
        text: dto.text,
        power: dto.power,
        toughness: dto.toughness,
        types: dto.types,
        printings,
    }
}

// ============================================================================
// QUERY URLS
// ============================================================================

fn name_query_url(base: &str, name: &str) -> String {
    format!("{}/cards?name={}", base, urlencoding::encode(name))
}

fn fuzzy_query_url(base: &str, name: &str) -> String {
    format!("{}/cards/named?fuzzy={}", base, urlencoding::encode(name))
}

fn search_query_url(base: &str, query: &str, set: Option<&str>) -> String {
    let full_query = match set {
        Some(set) => format!("{} e:{}", query, set),
        None => query.to_string(),
    };
    format!("{}/cards/search?q={}", base, urlencoding::encode(&full_query))
}

// ============================================================================
// HTTP CLIENT
// ============================================================================

/// Catalog client backed by `reqwest`.
pub struct HttpCatalogClient {
    base_url: String,
    http_client: Client,
}

impl HttpCatalogClient {
    /// Create a new catalog client. The underlying HTTP client is built once
    /// with a request timeout; individual lookups perform a single attempt.
    pub fn new(base_url: &str) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Perform one GET and classify the result per the error policy:
    /// 404 → NotFound, other non-success or network failure → Transport,
    /// undecodable body → Decode.
    async fn get_json<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("catalog request failed: {}", e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::NotFound),
            status if !status.is_success() => Err(AppError::Transport(format!(
                "catalog returned status {}",
                status
            ))),
            _ => response
                .json::<T>()
                .await
                .map_err(|e| AppError::Decode(e.to_string())),
        }
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn cards_by_name(&self, name: &str) -> AppResult<Vec<Card>> {
        let url = name_query_url(&self.base_url, name);
        let cards: Vec<CardDto> = self.get_json(&url).await?;
        Ok(cards.into_iter().map(map_card).collect())
    }

    async fn card_fuzzy(&self, name: &str) -> AppResult<Card> {
        let url = fuzzy_query_url(&self.base_url, name);
        let card: CardDto = self.get_json(&url).await?;
        Ok(map_card(card))
    }

    async fn search<'a>(&self, query: &str, set: Option<&'a str>) -> AppResult<Vec<Card>> {
        let url = search_query_url(&self.base_url, query, set);
        let page: SearchPage = self.get_json(&url).await?;
        Ok(page.data.into_iter().map(map_card).collect())
    }
}
