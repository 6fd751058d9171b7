//! Text normalization shared by the agreement and majority signals.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("punctuation regex"))
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"))
}

/// Canonical form of an answer: lowercased, punctuation stripped,
/// whitespace collapsed. "Blue!" and " blue " normalize identically.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = punctuation().replace_all(&lowered, "");
    whitespace()
        .replace_all(stripped.trim(), " ")
        .into_owned()
}

/// Token set of the normalized text, for set-overlap similarity.
pub fn token_set(text: &str) -> HashSet<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_case_punctuation_whitespace() {
        assert_eq!(normalize("  The capital is   Paris!  "), "the capital is paris");
        assert_eq!(normalize("Blue!"), normalize(" blue "));
    }

    #[test]
    fn token_set_ignores_order() {
        assert_eq!(token_set("paris france"), token_set("France, Paris"));
    }
}
