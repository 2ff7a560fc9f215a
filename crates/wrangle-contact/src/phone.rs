//! Russian phone-number normalization.

use once_cell::sync::Lazy;
use regex::Regex;

// Optional country prefix: +7, 7, or 8; the rest is captured as-is.
static PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+?7|8|)(.*)$").expect("prefix pattern is valid"));

static CANONICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+7[0-9]{10}$").expect("canonical pattern is valid"));

/// Normalizes a Russian phone number in arbitrary format to `+7xxxxxxxxxx`.
///
/// Accepts `+7`, `7`, `8`, or no country prefix, with any punctuation
/// between the digits. Returns `None` when the remaining number is not
/// exactly ten digits.
///
/// # Example
///
/// ```
/// use wrangle_contact::normalize_ru_phone;
///
/// assert_eq!(
///     normalize_ru_phone("8 (912) 345-67-89").as_deref(),
///     Some("+79123456789")
/// );
/// assert_eq!(normalize_ru_phone("12345"), None);
/// ```
pub fn normalize_ru_phone(s: &str) -> Option<String> {
    if s.is_empty() {
        return None;
    }

    // Keep only digits and plus signs before looking at the prefix.
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    let rest = PREFIX_RE.captures(&cleaned)?.get(1)?.as_str();
    let digits: String = rest.chars().filter(char::is_ascii_digit).collect();
    let candidate = format!("+7{digits}");

    CANONICAL_RE.is_match(&candidate).then_some(candidate)
}
