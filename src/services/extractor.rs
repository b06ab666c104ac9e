// src/services/extractor.rs
use regex::Regex;

/// Scans raw message text for card reference patterns.
///
/// Two recognized forms, mutually exclusive per message:
/// - direct command: the entire message is `!<reference>`
/// - inline: every non-overlapping `[[reference]]` span, in message order
///
/// A message matching neither yields an empty vector, which callers must
/// treat as "not a command" and act on no further. Filtering out the bot's
/// own messages is the gateway's job, not this component's.
pub struct ReferenceExtractor {
    direct: Regex,
    inline: Regex,
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self {
            direct: Regex::new(r"^!(.+)$").unwrap(),
            inline: Regex::new(r"\[\[([^\]]+)\]\]").unwrap(),
        }
    }
}

impl ReferenceExtractor {
    /// Extract raw reference strings from one message.
    ///
    /// The direct command strips only the `!` marker; surrounding whitespace
    /// in the reference is preserved as typed.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if let Some(captures) = self.direct.captures(text) {
            return vec![captures[1].to_string()];
        }

        self.inline
            .captures_iter(text)
            .map(|captures| captures[1].to_string())
            .collect()
    }
}
