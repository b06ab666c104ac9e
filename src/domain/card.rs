// src/domain/card.rs
use serde::{Deserialize, Serialize};

/// One published appearance of a card in a specific set.
/// Immutable once fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPrinting {
    /// Short set code (e.g. "LEA")
    pub set_id: String,

    /// Full set name (e.g. "Limited Edition Alpha")
    pub set: String,

    /// Collector number within the set
    pub number: String,

    /// Numeric catalog id; 0 means absent/unknown, which also signals a
    /// printing without a renderable image
    pub multiverse_id: u64,

    /// Image URL for this printing
    pub image_url: String,

    /// Layout tag ("split" printings link differently)
    pub layout: String,

    /// Price in USD as reported by the catalog, when available
    pub price: Option<String>,
}

impl CardPrinting {
    /// A zero catalog id marks an edition without a renderable image.
    pub fn has_image_id(&self) -> bool {
        self.multiverse_id != 0
    }

    pub fn is_split(&self) -> bool {
        self.layout == "split"
    }
}

/// Canonical card record as returned by a catalog query.
///
/// Invariant: every `Card` produced by a successful catalog query carries at
/// least one printing. Consumers must still not index `printings[0]` without
/// checking length; `EditionSelector::select` encodes the check as `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Non-empty card name, the primary matching key
    pub name: String,

    /// Mana cost in symbol markup (may be empty, e.g. for lands)
    pub cost: String,

    /// Oracle/rules text in symbol markup
    pub text: String,

    /// Power; empty when the card has none
    pub power: String,

    /// Toughness; empty when the card has none
    pub toughness: String,

    /// Ordered type tokens (supertypes, "—", subtypes)
    pub types: Vec<String>,

    /// Ordered printings, newest ids not guaranteed first
    pub printings: Vec<CardPrinting>,
}

impl Card {
    /// Absence of power is the signal a card is not a creature.
    pub fn is_creature(&self) -> bool {
        !self.power.is_empty()
    }
}
