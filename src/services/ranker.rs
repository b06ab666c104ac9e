// src/services/ranker.rs
use crate::domain::Card;

/// Scores catalog candidates against the user's typed name and picks the
/// single best match.
///
/// Two passes, in priority order:
/// 1. Case-insensitive prefix match. The LAST prefix match in catalog order
///    wins outright. This tie-break is an observable behavior of the
///    reference implementation and is preserved as-is (see DESIGN.md).
/// 2. Weighted edit distance fallback (insert 1, delete 1, substitute 2);
///    minimum distance wins, first-seen candidate on ties.
#[derive(Debug, Default)]
pub struct CandidateRanker;

impl CandidateRanker {
    /// Pick the best candidate for `typed_name`.
    ///
    /// Precondition: `candidates` is non-empty; the resolver guarantees this
    /// before calling.
    pub fn rank<'a>(&self, candidates: &'a [Card], typed_name: &str) -> &'a Card {
        debug_assert!(!candidates.is_empty());

        let typed = typed_name.to_uppercase();

        let mut prefix_match: Option<&Card> = None;
        for card in candidates {
            if card.name.to_uppercase().starts_with(&typed) {
                prefix_match = Some(card);
            }
        }
        if let Some(card) = prefix_match {
            return card;
        }

        let mut best = &candidates[0];
        let mut best_distance = edit_distance(&typed, &best.name.to_uppercase());
        for card in &candidates[1..] {
            let distance = edit_distance(&typed, &card.name.to_uppercase());
            if distance < best_distance {
                best = card;
                best_distance = distance;
            }
        }
        best
    }
}

/// Wagner-Fischer distance with insertion 1, deletion 1, substitution 2.
/// O(n*m) time, O(m) space.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let substitution = prev[j - 1] + if a[i - 1] == b[j - 1] { 0 } else { 2 };
            curr[j] = substitution.min(prev[j] + 1).min(curr[j - 1] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> Card {
        Card {
            name: name.to_string(),
            cost: String::new(),
            text: String::new(),
            power: String::new(),
            toughness: String::new(),
            types: Vec::new(),
            printings: Vec::new(),
        }
    }

    #[test]
    fn test_exact_name_wins() {
        // Prefix rule subsumes exact match
        let candidates = vec![card("Lightning Bolts"), card("Lightning Bolt")];
        let ranker = CandidateRanker;
        assert_eq!(ranker.rank(&candidates, "Lightning Bolt").name, "Lightning Bolt");
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let candidates = vec![card("Fireball"), card("LIGHTNING BOLT")];
        let ranker = CandidateRanker;
        assert_eq!(ranker.rank(&candidates, "lightning").name, "LIGHTNING BOLT");
    }

    #[test]
    fn test_last_prefix_match_wins() {
        // Preserved quirk: ties go to the last prefix match in catalog
        // order, not the shortest name
        let candidates = vec![
            card("Bolt of Keranos"),
            card("Boltwing Marauder"),
            card("Fireball"),
        ];
        let ranker = CandidateRanker;
        assert_eq!(ranker.rank(&candidates, "Bolt").name, "Boltwing Marauder");
    }

    #[test]
    fn test_edit_distance_fallback() {
        // No candidate starts with the typed name; closest distance wins
        let candidates = vec![card("Counterspell"), card("Shock")];
        let ranker = CandidateRanker;
        assert_eq!(ranker.rank(&candidates, "Shocks").name, "Shock");
    }

    #[test]
    fn test_edit_distance_ties_keep_first_seen() {
        // Both names are one deletion away from the typed name
        let candidates = vec![card("AB"), card("BC")];
        let ranker = CandidateRanker;
        assert_eq!(ranker.rank(&candidates, "ABC").name, "AB");
    }

    #[test]
    fn test_weighted_costs() {
        assert_eq!(edit_distance("ABC", "ABC"), 0);
        assert_eq!(edit_distance("ABC", "AB"), 1); // one deletion
        assert_eq!(edit_distance("AB", "ABC"), 1); // one insertion
        assert_eq!(edit_distance("ABC", "AXC"), 2); // one substitution
        assert_eq!(edit_distance("", "ABC"), 3);
        assert_eq!(edit_distance("ABC", ""), 3);
    }

    #[test]
    fn test_substitution_costs_more_than_insert_delete() {
        // Against "ABCD", "AXCD" is one substitution (2) while "ABC" is one
        // deletion (1); neither is a prefix match, so the deletion wins
        let candidates = vec![card("AXCD"), card("ABC")];
        let ranker = CandidateRanker;
        assert_eq!(ranker.rank(&candidates, "ABCD").name, "ABC");
    }
}
