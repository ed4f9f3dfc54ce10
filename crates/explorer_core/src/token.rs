use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of Unicode letters, numbers and underscores. Combining marks
/// are separators.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is a valid regex"));

/// Splits `text` into lowercase word tokens, left to right, duplicates kept.
///
/// The text is case-folded before matching.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
