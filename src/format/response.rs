// src/format/response.rs
//
// Response Formatter - turns a resolved card + original reference into the
// outbound message payload. Neither variant performs the network send; the
// gateway's transport delivers the returned body.

use crate::domain::{Card, CardPrinting, Reference};
use crate::format::{ManaTextFormatter, TypeLineFormatter};
use crate::services::EditionSelector;

/// Which payload the formatter produces. Selected once at construction and
/// dispatched through the single `format` entry point; no runtime type
/// inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Bold name, mana cost, stats, type line, rules text and a card link
    Text,

    /// The selected printing's image URL as the entire body
    Image,
}

pub struct ResponseFormatter {
    mode: ResponseMode,
    mana: ManaTextFormatter,
    type_line: TypeLineFormatter,
    editions: EditionSelector,
    link_base: String,
}

impl ResponseFormatter {
    pub fn new(mode: ResponseMode, link_base: &str) -> Self {
        Self {
            mode,
            mana: ManaTextFormatter::default(),
            type_line: TypeLineFormatter,
            editions: EditionSelector,
            link_base: link_base.trim_end_matches('/').to_string(),
        }
    }

    /// Build the outbound message body for one resolved card. The printing
    /// to display comes from `EditionSelector` using the edition hint parsed
    /// out of the original reference.
    pub fn format(&self, reference: &Reference, card: &Card) -> String {
        let printing = self
            .editions
            .select(&card.printings, reference.edition_hint());

        match self.mode {
            ResponseMode::Text => self.format_text(card, printing),
            ResponseMode::Image => {
                printing.map(|p| p.image_url.clone()).unwrap_or_default()
            }
        }
    }

    fn format_text(&self, card: &Card, printing: Option<&CardPrinting>) -> String {
        let mut body = format!("**{}** {}", card.name, self.mana.format(&card.cost));

        if !card.power.is_empty() {
            body.push_str(&format!(" [{}/{}]", card.power, card.toughness));
        }
        body.push('\n');

        if !card.types.is_empty() {
            body.push_str(&self.type_line.format(&card.types));
            body.push('\n');
        }

        body.push_str(&self.mana.format(&card.text));
        body.push('\n');
        body.push_str(&self.card_link(card, printing));
        body
    }

    /// Split cards get a direct link keyed by set code and collector number;
    /// everything else gets a name search link.
    fn card_link(&self, card: &Card, printing: Option<&CardPrinting>) -> String {
        if let Some(printing) = printing {
            if printing.is_split() {
                return format!(
                    "<{}/{}/en/{}.html>",
                    self.link_base,
                    printing.set_id.to_lowercase(),
                    printing.number
                );
            }
        }
        format!(
            "<{}/query?q=!{}>",
            self.link_base,
            urlencoding::encode(&card.name)
        )
    }
}
