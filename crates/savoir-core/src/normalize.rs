use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form of a free-text answer: lower-cased, accents
/// stripped, everything outside `[a-z0-9]` dropped.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Two answers match when their normalized forms are identical.
#[inline]
pub fn answers_match(expected: &str, given: &str) -> bool {
    normalize(expected) == normalize(given)
}
