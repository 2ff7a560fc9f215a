//! Leaf values and search needles.
//!
//! The [`Scalar`] enum represents every non-container value a nested
//! container can hold, and every needle a search can look for. Loose
//! comparison works over each scalar's canonical string form; strict
//! comparison requires matching variants first.

use std::borrow::Cow;

/// A scalar value: a leaf in a nested container, or a search needle.
///
/// # Example
///
/// ```
/// use wrangle_nest::Scalar;
///
/// let a = Scalar::Int(1);
/// let b = Scalar::Str("1".to_string());
///
/// // Loose comparison casts both sides to their canonical string form.
/// assert!(a.loose_eq(&b));
///
/// // Strict comparison requires the same variant.
/// assert!(!a.strict_eq(&b));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Absence of a value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Owned string.
    Str(String),
}

impl Scalar {
    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Scalar::Bool(_))
    }

    /// Returns `true` if this is an `Int` value.
    pub fn is_int(&self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    /// Returns `true` if this is a `Float` value.
    pub fn is_float(&self) -> bool {
        matches!(self, Scalar::Float(_))
    }

    /// Returns `true` if this is a `Str` value.
    pub fn is_str(&self) -> bool {
        matches!(self, Scalar::Str(_))
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the integer value, if present.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the float value, if present.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` if this scalar never matches anything as a needle.
    ///
    /// An empty string and `Null` are the two "empty needle" forms: every
    /// search short-circuits to its not-found result without traversing.
    pub fn is_empty_needle(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Str(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the canonical string form used by loose comparison.
    ///
    /// - `Null` -> `""`
    /// - `Bool(true)` -> `"1"`, `Bool(false)` -> `""`
    /// - `Int` -> decimal digits
    /// - `Float` -> shortest round-trip decimal (`1.0` prints as `"1"`)
    /// - `Str` -> the string itself
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Scalar::Null => Cow::Borrowed(""),
            Scalar::Bool(true) => Cow::Borrowed("1"),
            Scalar::Bool(false) => Cow::Borrowed(""),
            Scalar::Int(n) => Cow::Owned(n.to_string()),
            Scalar::Float(f) => Cow::Owned(f.to_string()),
            Scalar::Str(s) => Cow::Borrowed(s),
        }
    }

    /// Loose equality: canonical string forms compare equal.
    pub fn loose_eq(&self, other: &Scalar) -> bool {
        self.canonical() == other.canonical()
    }

    /// Loose, case-folded equality.
    pub fn loose_eq_ci(&self, other: &Scalar) -> bool {
        self.canonical().to_lowercase() == other.canonical().to_lowercase()
    }

    /// Strict equality: same variant, equal value.
    ///
    /// `Int` and `Float` are distinct types here even when numerically
    /// equal, and `Float` follows IEEE semantics (`NaN != NaN`).
    pub fn strict_eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            _ => false,
        }
    }

    /// Strict, case-folded equality: same variant, and strings compare
    /// case-insensitively. Non-string variants fall back to [`strict_eq`].
    ///
    /// [`strict_eq`]: Scalar::strict_eq
    pub fn strict_eq_ci(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Str(a), Scalar::Str(b)) => a.to_lowercase() == b.to_lowercase(),
            _ => self.strict_eq(other),
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

// Conversions from primitive types

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n as i64)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Int(n as i64)
    }
}

impl From<f32> for Scalar {
    fn from(f: f32) -> Self {
        Scalar::Float(f as f64)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_type_checks() {
        assert!(Scalar::Null.is_null());
        assert!(Scalar::Bool(true).is_bool());
        assert!(Scalar::Int(42).is_int());
        assert!(Scalar::Float(1.5).is_float());
        assert!(Scalar::Str("x".into()).is_str());
        assert!(!Scalar::Int(42).is_str());
    }

    #[test]
    fn scalar_extractors() {
        assert_eq!(Scalar::Bool(true).as_bool(), Some(true));
        assert_eq!(Scalar::Int(42).as_int(), Some(42));
        assert_eq!(Scalar::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Scalar::Str("hi".into()).as_str(), Some("hi"));

        assert_eq!(Scalar::Int(1).as_str(), None);
        assert_eq!(Scalar::Str("1".into()).as_int(), None);
    }

    #[test]
    fn canonical_forms() {
        assert_eq!(Scalar::Null.canonical(), "");
        assert_eq!(Scalar::Bool(true).canonical(), "1");
        assert_eq!(Scalar::Bool(false).canonical(), "");
        assert_eq!(Scalar::Int(42).canonical(), "42");
        assert_eq!(Scalar::Int(-7).canonical(), "-7");
        assert_eq!(Scalar::Float(1.0).canonical(), "1");
        assert_eq!(Scalar::Float(1.5).canonical(), "1.5");
        assert_eq!(Scalar::Str("abc".into()).canonical(), "abc");
    }

    #[test]
    fn empty_needle_forms() {
        assert!(Scalar::Null.is_empty_needle());
        assert!(Scalar::Str(String::new()).is_empty_needle());
        assert!(!Scalar::Str("x".into()).is_empty_needle());
        assert!(!Scalar::Int(0).is_empty_needle());
        assert!(!Scalar::Bool(false).is_empty_needle());
    }

    #[test]
    fn loose_equality_casts_both_sides() {
        assert!(Scalar::Int(1).loose_eq(&Scalar::Str("1".into())));
        assert!(Scalar::Float(1.0).loose_eq(&Scalar::Int(1)));
        assert!(Scalar::Bool(true).loose_eq(&Scalar::Str("1".into())));
        assert!(Scalar::Null.loose_eq(&Scalar::Str("".into())));
        assert!(!Scalar::Int(1).loose_eq(&Scalar::Str("2".into())));
    }

    #[test]
    fn loose_case_insensitive() {
        let a = Scalar::Str("Hello".into());
        let b = Scalar::Str("hello".into());
        assert!(!a.loose_eq(&b));
        assert!(a.loose_eq_ci(&b));
    }

    #[test]
    fn strict_equality_requires_same_variant() {
        assert!(Scalar::Int(1).strict_eq(&Scalar::Int(1)));
        assert!(!Scalar::Int(1).strict_eq(&Scalar::Str("1".into())));
        assert!(!Scalar::Int(1).strict_eq(&Scalar::Float(1.0)));
        assert!(Scalar::Null.strict_eq(&Scalar::Null));
        assert!(!Scalar::Float(f64::NAN).strict_eq(&Scalar::Float(f64::NAN)));
    }

    #[test]
    fn strict_case_insensitive_still_checks_type() {
        let s = Scalar::Str("ABC".into());
        assert!(s.strict_eq_ci(&Scalar::Str("abc".into())));
        assert!(!s.strict_eq_ci(&Scalar::Int(1)));
        assert!(Scalar::Int(1).strict_eq_ci(&Scalar::Int(1)));
    }

    #[test]
    fn conversions() {
        assert_eq!(Scalar::from(true), Scalar::Bool(true));
        assert_eq!(Scalar::from(42i32), Scalar::Int(42));
        assert_eq!(Scalar::from(42i64), Scalar::Int(42));
        assert_eq!(Scalar::from(42u32), Scalar::Int(42));
        assert_eq!(Scalar::from(1.5f64), Scalar::Float(1.5));
        assert_eq!(Scalar::from("x"), Scalar::Str("x".into()));
        assert_eq!(Scalar::from("x".to_string()), Scalar::Str("x".into()));
    }

    #[test]
    fn display_uses_canonical_form() {
        assert_eq!(Scalar::Int(7).to_string(), "7");
        assert_eq!(Scalar::Bool(false).to_string(), "");
        assert_eq!(Scalar::Str("abc".into()).to_string(), "abc");
    }
}
