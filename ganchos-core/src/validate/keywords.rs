//! Keyword extraction from claim descriptions.

use std::sync::OnceLock;

use regex::Regex;

/// Words dropped from claims before matching.
pub const STOP_WORDS: &[&str] = &[
    "the", "is", "are", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "a", "an",
];

/// Substrings that mark a token as a technical term worth preferring.
pub const TECHNICAL_MARKERS: &[&str] = &[
    "api", "auth", "login", "user", "data", "service", "function", "method", "class",
];

/// At most this many keywords are extracted per claim.
pub const MAX_KEYWORDS: usize = 5;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w+").expect("static pattern"))
}

/// Extract up to [`MAX_KEYWORDS`] search keywords from a claim.
///
/// Tokens are lowercased, stop-words and short tokens dropped. When any
/// surviving token carries a technical marker, those tokens are preferred
/// (in appearance order); otherwise the first general tokens are used.
pub fn extract_keywords(claim: &str) -> Vec<String> {
    let lowered = claim.to_lowercase();

    let keywords: Vec<String> = word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|word| word.chars().count() > 2 && !STOP_WORDS.contains(&word.as_str()))
        .collect();

    let technical: Vec<String> = keywords
        .iter()
        .filter(|word| TECHNICAL_MARKERS.iter().any(|marker| word.contains(marker)))
        .cloned()
        .collect();

    if technical.is_empty() {
        keywords.into_iter().take(MAX_KEYWORDS).collect()
    } else {
        technical.into_iter().take(MAX_KEYWORDS).collect()
    }
}
