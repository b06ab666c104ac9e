// src/format/type_line.rs

/// Joins a card's type tokens into a title-cased, italicized type line.
#[derive(Debug, Default)]
pub struct TypeLineFormatter;

impl TypeLineFormatter {
    /// Join tokens with single spaces, wrap in `*...*`, title-case the
    /// result. Empty input yields an empty italicized line; this edge case
    /// is preserved, not special-cased away.
    pub fn format(&self, types: &[String]) -> String {
        title_case(&format!("*{}*", types.join(" ")))
    }
}

/// Uppercase every letter that follows a non-letter, like the title-casing
/// the original response text went through.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for ch in input.chars() {
        if ch.is_alphabetic() && !prev_is_letter {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_letter = ch.is_alphabetic();
    }
    out
}
