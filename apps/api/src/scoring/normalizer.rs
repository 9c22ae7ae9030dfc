use std::collections::BTreeSet;

/// Canonical keyword set of a document. Ordered so truncated keyword lists are
/// stable from one call to the next.
pub type TokenSet = BTreeSet<String>;

/// Lower-cases `text` and splits it on whitespace.
///
/// Deliberately naive: punctuation stays attached ("python," ≠ "python"), and
/// there is no stemming or stop-word removal.
pub fn normalize(text: &str) -> TokenSet {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
