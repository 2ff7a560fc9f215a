//! URL string normalization and host extraction.

use ::url::Url;

/// Ensures the string ends with exactly one slash.
///
/// # Example
///
/// ```
/// use wrangle_text::ensure_trailing_slash;
///
/// assert_eq!(ensure_trailing_slash("https://a.b.c"), "https://a.b.c/");
/// assert_eq!(ensure_trailing_slash("https://a.b.c/"), "https://a.b.c/");
/// assert_eq!(ensure_trailing_slash(""), "/");
/// ```
pub fn ensure_trailing_slash(s: &str) -> String {
    if s.is_empty() {
        return "/".to_string();
    }
    format!("{}/", s.trim_end_matches('/'))
}

/// Removes every trailing slash.
pub fn strip_trailing_slash(s: &str) -> String {
    s.trim_end_matches('/').to_string()
}

/// Ensures the string starts with exactly one slash.
pub fn ensure_leading_slash(s: &str) -> String {
    if s.is_empty() {
        return "/".to_string();
    }
    format!("/{}", s.trim_start_matches('/'))
}

/// Extracts the host name, without scheme, port, path, or fragment.
///
/// Input that does not parse as an absolute URL falls back to the text
/// before the first `/`.
///
/// # Example
///
/// ```
/// use wrangle_text::host_only;
///
/// assert_eq!(host_only("https://a.b.c:9090/path?arg=value#anchor"), "a.b.c");
/// assert_eq!(host_only("a.b.c/path"), "a.b.c");
/// assert_eq!(host_only(""), "");
/// ```
pub fn host_only(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match Url::parse(trimmed) {
        Ok(url) => match url.host_str() {
            Some(host) => host.to_string(),
            None => leading_segment(trimmed),
        },
        Err(_) => leading_segment(trimmed),
    }
}

/// Extracts `scheme://host`, dropping port, path, and fragment.
///
/// Input without a parseable scheme falls back to the bare leading
/// segment, the same as [`host_only`].
pub fn host_with_scheme(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match Url::parse(trimmed) {
        Ok(url) => match url.host_str() {
            Some(host) => format!("{}://{}", url.scheme(), host),
            None => leading_segment(trimmed),
        },
        Err(_) => leading_segment(trimmed),
    }
}

/// Extracts `scheme://host/path`, dropping port, query, and fragment.
///
/// The root path renders as a single trailing slash.
pub fn host_with_scheme_and_path(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match Url::parse(trimmed) {
        Ok(url) => match url.host_str() {
            Some(host) => format!("{}://{}{}", url.scheme(), host, url.path()),
            None => leading_segment(trimmed),
        },
        Err(_) => leading_segment(trimmed),
    }
}

fn leading_segment(s: &str) -> String {
    s.split('/').next().unwrap_or("").to_string()
}
