//! Search operations over nested containers.
//!
//! The [`Find`] builder carries the comparison flags (case folding, strict
//! typing, recursion) that the search operations thread through the
//! traversal. The free functions at the bottom run each operation with the
//! default flags: case-sensitive, loose, recursive.

use crate::key::Key;
use crate::node::{Branch, Node};
use crate::scalar::Scalar;

/// Search options for the traversal operations.
///
/// Defaults are case-sensitive, loose (string-cast) comparison, recursing
/// into nested branches. Every search short-circuits on an empty needle
/// (`Null` or `""`) and stops at the first depth-first match.
///
/// # Example
///
/// ```
/// use wrangle_nest::{Branch, Find, Scalar};
///
/// let mut inner = Branch::new();
/// inner.insert("Host", "db.local");
///
/// let mut root = Branch::new();
/// root.insert("server", inner);
///
/// let find = Find::new().case_insensitive();
/// assert!(find.key_exists(&Scalar::from("host"), &root));
///
/// // Shallow search stays at the top level.
/// assert!(!Find::new().shallow().key_exists(&Scalar::from("Host"), &root));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Find {
    case_insensitive: bool,
    recurse: bool,
    strict: bool,
}

impl Default for Find {
    fn default() -> Self {
        Find {
            case_insensitive: false,
            recurse: true,
            strict: false,
        }
    }
}

impl Find {
    /// Creates the default search options.
    pub fn new() -> Self {
        Find::default()
    }

    /// Folds case when comparing keys, values, and substrings.
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Restricts the search to top-level entries.
    ///
    /// Nested branches are not descended into; for value searches they are
    /// skipped entirely, never compared as values themselves.
    pub fn shallow(mut self) -> Self {
        self.recurse = false;
        self
    }

    /// Requires needle and value to have the same runtime type.
    ///
    /// Applies to value searches only; keys always compare by canonical
    /// string form.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Returns `true` if some key equals `needle` under these options.
    ///
    /// With recursion enabled, keys at any depth count; first match wins.
    pub fn key_exists(&self, needle: &Scalar, haystack: &Branch) -> bool {
        if needle.is_empty_needle() {
            return false;
        }
        self.key_exists_inner(needle, haystack)
    }

    fn key_exists_inner(&self, needle: &Scalar, haystack: &Branch) -> bool {
        for (key, value) in haystack.entries() {
            if key.matches(needle, self.case_insensitive) {
                return true;
            }
            if self.recurse {
                if let Node::Branch(child) = value {
                    if self.key_exists_inner(needle, child) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Returns `true` if some leaf value equals `needle` under these options.
    pub fn value_exists(&self, needle: &Scalar, haystack: &Branch) -> bool {
        self.find_key(needle, haystack).is_some()
    }

    /// Returns the key of the first leaf equal to `needle`, or `None`.
    ///
    /// Depth-first: each entry's subtree is exhausted before moving to the
    /// next sibling, so a match nested under an early sibling wins over a
    /// top-level match further right.
    pub fn find_key(&self, needle: &Scalar, haystack: &Branch) -> Option<Key> {
        if needle.is_empty_needle() {
            return None;
        }
        self.find_key_inner(needle, haystack)
    }

    fn find_key_inner(&self, needle: &Scalar, haystack: &Branch) -> Option<Key> {
        for (key, value) in haystack.entries() {
            match value {
                Node::Branch(child) => {
                    if self.recurse {
                        if let Some(found) = self.find_key_inner(needle, child) {
                            return Some(found);
                        }
                    }
                }
                Node::Leaf(leaf) => {
                    if self.leaf_matches(needle, leaf) {
                        return Some(key.clone());
                    }
                }
            }
        }
        None
    }

    /// Returns the key of the first string leaf containing `needle`, or `None`.
    ///
    /// Only string leaves participate; other leaf types are skipped. The
    /// strict flag has no effect here.
    pub fn find_key_containing(&self, needle: &str, haystack: &Branch) -> Option<Key> {
        if needle.is_empty() {
            return None;
        }
        if self.case_insensitive {
            self.containing_inner(&needle.to_lowercase(), haystack)
        } else {
            self.containing_inner(needle, haystack)
        }
    }

    fn containing_inner(&self, needle: &str, haystack: &Branch) -> Option<Key> {
        for (key, value) in haystack.entries() {
            match value {
                Node::Branch(child) => {
                    if self.recurse {
                        if let Some(found) = self.containing_inner(needle, child) {
                            return Some(found);
                        }
                    }
                }
                Node::Leaf(Scalar::Str(s)) => {
                    let hit = if self.case_insensitive {
                        s.to_lowercase().contains(needle)
                    } else {
                        s.contains(needle)
                    };
                    if hit {
                        return Some(key.clone());
                    }
                }
                Node::Leaf(_) => {}
            }
        }
        None
    }

    fn leaf_matches(&self, needle: &Scalar, leaf: &Scalar) -> bool {
        match (self.strict, self.case_insensitive) {
            (false, false) => leaf.loose_eq(needle),
            (true, false) => leaf.strict_eq(needle),
            (false, true) => leaf.loose_eq_ci(needle),
            (true, true) => leaf.strict_eq_ci(needle),
        }
    }
}

// ============================================================================
// Free functions with default options
// ============================================================================

/// [`Find::key_exists`] with default options.
pub fn key_exists(needle: &Scalar, haystack: &Branch) -> bool {
    Find::new().key_exists(needle, haystack)
}

/// [`Find::value_exists`] with default options.
pub fn value_exists(needle: &Scalar, haystack: &Branch) -> bool {
    Find::new().value_exists(needle, haystack)
}

/// [`Find::find_key`] with default options.
pub fn find_key(needle: &Scalar, haystack: &Branch) -> Option<Key> {
    Find::new().find_key(needle, haystack)
}

/// [`Find::find_key_containing`] with default options.
pub fn find_key_containing(needle: &str, haystack: &Branch) -> Option<Key> {
    Find::new().find_key_containing(needle, haystack)
}
