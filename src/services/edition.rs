// src/services/edition.rs
use crate::domain::CardPrinting;

/// Picks the printing to link or display for a resolved card.
///
/// Two-tier policy balancing "best known image" against what the user
/// explicitly asked for:
/// - with an edition hint, the first printing whose short set code or full
///   set name equals the hint (case-insensitive) AND whose catalog id is
///   non-zero wins; a zero id signals a printing without a renderable image,
///   so it is skipped even when the code matches
/// - otherwise (or when no printing matches the hint) the printing with the
///   highest catalog id wins, which approximates "most recent printing"
#[derive(Debug, Default)]
pub struct EditionSelector;

impl EditionSelector {
    /// Select a printing. Returns `None` only for an empty printings list,
    /// which a successful catalog query never produces.
    pub fn select<'a>(
        &self,
        printings: &'a [CardPrinting],
        edition_hint: Option<&str>,
    ) -> Option<&'a CardPrinting> {
        if printings.is_empty() {
            return None;
        }

        if let Some(hint) = edition_hint {
            let hint = hint.to_uppercase();
            let hinted = printings.iter().find(|printing| {
                (printing.set_id.to_uppercase() == hint || printing.set.to_uppercase() == hint)
                    && printing.has_image_id()
            });
            if hinted.is_some() {
                return hinted;
            }
        }

        let mut best = &printings[0];
        for printing in &printings[1..] {
            if printing.multiverse_id > best.multiverse_id {
                best = printing;
            }
        }
        Some(best)
    }
}
