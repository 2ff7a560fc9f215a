//! Flattening nested containers into single-level path maps.

use crate::node::Node;
use crate::scalar::Scalar;

/// Flattens a node into `(path, leaf)` pairs in depth-first discovery order.
///
/// Top-level keys use their bare name; nested keys append `[child]` to the
/// parent's path. With a `key_prefix`, every top-level key nests under it.
///
/// Two special cases mark structure that would otherwise vanish:
/// - a `Null` leaf under a prefix maps the prefix to [`Scalar::Null`],
/// - an empty branch under a prefix maps the prefix to an empty string.
///
/// An empty branch with no prefix flattens to nothing. The result is lossy
/// about shape (a path does not say whether its parent held more), but every
/// leaf value survives.
///
/// # Example
///
/// ```
/// use wrangle_nest::{flatten, Branch, Node, Scalar};
///
/// let mut a = Branch::new();
/// a.insert("b", 1i64);
/// a.insert("c", 2i64);
///
/// let mut root = Branch::new();
/// root.insert("a", a);
///
/// let flat = flatten(&Node::Branch(root), None);
/// assert_eq!(
///     flat,
///     vec![
///         ("a[b]".to_string(), Scalar::Int(1)),
///         ("a[c]".to_string(), Scalar::Int(2)),
///     ]
/// );
/// ```
pub fn flatten(node: &Node, key_prefix: Option<&str>) -> Vec<(String, Scalar)> {
    let mut out = Vec::new();
    flatten_into(node, key_prefix, &mut out);
    out
}

fn flatten_into(node: &Node, prefix: Option<&str>, out: &mut Vec<(String, Scalar)>) {
    match node {
        Node::Leaf(scalar) => {
            out.push((prefix.unwrap_or("").to_string(), scalar.clone()));
        }
        Node::Branch(branch) if branch.is_empty() => {
            if let Some(p) = prefix {
                out.push((p.to_string(), Scalar::Str(String::new())));
            }
        }
        Node::Branch(branch) => {
            for (key, child) in branch.entries() {
                let path = match prefix {
                    Some(p) => format!("{}[{}]", p, key),
                    None => key.to_string(),
                };
                flatten_into(child, Some(&path), out);
            }
        }
    }
}
