// src/format/mana.rs
use regex::Regex;

/// Rewrites embedded `{...}` symbol markup into display-ready inline code
/// spans, normalizing adjacent-symbol spacing.
///
/// Two rewrites applied in sequence:
/// (a) wrap every `{...}` token run in backticks (the token pattern is
///     greedy, so an adjacent run like `{2}{R}` becomes one code span)
/// (b) insert a single space at every `}{` boundary
///
/// Formatting is applied exactly once per response; idempotency on already
/// formatted input is not guaranteed.
pub struct ManaTextFormatter {
    token: Regex,
}

impl Default for ManaTextFormatter {
    fn default() -> Self {
        Self {
            token: Regex::new(r"\{(.+)\}").unwrap(),
        }
    }
}

impl ManaTextFormatter {
    pub fn format(&self, text: &str) -> String {
        let quoted = self.token.replace_all(text, "`$0`");
        quoted.replace("}{", "} {")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbol_is_quoted() {
        let formatter = ManaTextFormatter::default();
        assert_eq!(formatter.format("{R}"), "`{R}`");
    }

    #[test]
    fn test_adjacent_symbols_are_spaced() {
        let formatter = ManaTextFormatter::default();
        assert_eq!(formatter.format("{2}{R}{R}"), "`{2} {R} {R}`");
    }

    #[test]
    fn test_text_without_braces_passes_through() {
        let formatter = ManaTextFormatter::default();
        let text = "Lightning Bolt deals 3 damage to any target.";
        assert_eq!(formatter.format(text), text);
        assert_eq!(formatter.format(""), "");
    }

    #[test]
    fn test_symbols_inside_rules_text() {
        // The greedy token pattern spans from the first { to the last } on
        // the line, matching the reference behavior
        let formatter = ManaTextFormatter::default();
        assert_eq!(
            formatter.format("{T}: Add {G}."),
            "`{T}: Add {G}`."
        );
    }

    #[test]
    fn test_lines_are_rewritten_independently() {
        let formatter = ManaTextFormatter::default();
        assert_eq!(
            formatter.format("{T}: do a thing.\nPay {1}: do another."),
            "`{T}`: do a thing.\nPay `{1}`: do another."
        );
    }
}
