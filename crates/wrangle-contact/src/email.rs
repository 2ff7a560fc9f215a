//! Syntactic email validation.

use once_cell::sync::Lazy;
use regex::Regex;

// RFC-style local part; domain labels limited to 63 octets with no
// leading or trailing hyphen.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^[a-zA-Z0-9.!\#$%&'*+/=?^_`{|}~-]+
        @
        [a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?
        (?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Checks whether a string is a syntactically valid email address.
///
/// The domain must contain at least one dot (a bare top-level label is
/// rejected). Purely syntactic: no DNS lookup is performed. Empty input
/// is invalid.
///
/// # Example
///
/// ```
/// use wrangle_contact::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(!is_valid_email("user@localhost"));
/// assert!(!is_valid_email(""));
/// ```
pub fn is_valid_email(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let dotted_domain = s
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));
    dotted_domain && EMAIL_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("u_123@sub.example.org"));
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn requires_dotted_domain() {
        assert!(!is_valid_email("user@localhost"));
        assert!(is_valid_email("user@localhost.local"));
    }

    #[test]
    fn rejects_bad_domain_labels() {
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example-.com"));
        assert!(!is_valid_email("user@exam ple.com"));
    }
}
