// src/analysis/text.rs
//! Tokenization and matching helpers shared by the checks.

use regex::Regex;

/// Splits content on runs of whitespace. Never yields empty tokens.
#[must_use]
pub fn words(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}

/// Counts non-overlapping occurrences of `needle` in `haystack`, ignoring case.
///
/// The needle is matched literally: pattern syntax in it is escaped before the
/// matcher is built. If the matcher cannot be compiled (size limits on huge
/// keywords), falls back to a plain substring scan with the same semantics.
#[must_use]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let haystack = haystack.to_lowercase();
    let needle = needle.to_lowercase();

    match Regex::new(&regex::escape(&needle)) {
        Ok(re) => re.find_iter(&haystack).count(),
        Err(e) => {
            tracing::warn!("keyword matcher unavailable, scanning literally: {e}");
            haystack.matches(needle.as_str()).count()
        }
    }
}

/// First `n` words rejoined with single spaces, lowercased.
#[must_use]
pub fn introduction(words: &[&str], n: usize) -> String {
    words
        .iter()
        .take(n)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Keyword density in percent. Zero words means zero density.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn density(occurrences: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    occurrences as f64 * 100.0 / word_count as f64
}
