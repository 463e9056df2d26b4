use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// URL-friendly form of a title: lowercase ASCII words joined by hyphens.
/// Accented letters are reduced to their base letter through compatibility
/// decomposition; anything else outside ASCII, and punctuation other than
/// `-` and `_`, is dropped.
pub fn slugify(value: &str) -> String {
    let cleaned: String = value
        .nfkd()
        .filter(|c| c.is_ascii())
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || matches!(c, '_' | '-'))
        .collect();

    SEPARATOR_RUNS
        .replace_all(cleaned.trim(), "-")
        .trim_matches(|c| c == '-' || c == '_')
        .to_string()
}

pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
