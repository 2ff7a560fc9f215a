//! Structure-preserving transforms.

use crate::error::{NestError, Result};
use crate::node::{Branch, Node};
use crate::scalar::Scalar;

/// Applies `f` to every leaf, preserving structure and keys.
///
/// Empty input yields empty output.
///
/// # Example
///
/// ```
/// use wrangle_nest::{map_leaves, Branch, Node, Scalar};
///
/// let mut root = Branch::new();
/// root.insert("a", "x");
///
/// let upper = map_leaves(&Node::Branch(root), |s| match s {
///     Scalar::Str(v) => Scalar::Str(v.to_uppercase()),
///     other => other.clone(),
/// });
///
/// let branch = upper.as_branch().unwrap();
/// assert_eq!(branch.get("a"), Some(&Node::from("X")));
/// ```
pub fn map_leaves<F>(node: &Node, f: F) -> Node
where
    F: Fn(&Scalar) -> Scalar,
{
    map_leaves_inner(node, &f)
}

fn map_leaves_inner<F>(node: &Node, f: &F) -> Node
where
    F: Fn(&Scalar) -> Scalar,
{
    match node {
        Node::Leaf(s) => Node::Leaf(f(s)),
        Node::Branch(b) => Node::Branch(
            b.entries()
                .iter()
                .map(|(k, v)| (k.clone(), map_leaves_inner(v, f)))
                .collect(),
        ),
    }
}

/// Replaces `from` with `to` inside every string leaf.
///
/// The strict per-leaf variant of [`replace_serialized`]: a pattern can
/// only match within a single leaf value, and the container always
/// survives. An empty `from` replaces nothing.
pub fn replace_in_leaves(haystack: &Branch, from: &str, to: &str) -> Branch {
    if from.is_empty() {
        return haystack.clone();
    }
    haystack
        .entries()
        .iter()
        .map(|(k, v)| {
            let replaced = map_leaves(v, |s| match s {
                Scalar::Str(text) => Scalar::Str(text.replace(from, to)),
                other => other.clone(),
            });
            (k.clone(), replaced)
        })
        .collect()
}

/// Replaces `from` with `to` over the container's serialized form.
///
/// The whole branch is serialized to JSON text, the substring replace runs
/// over that text, and the result is parsed back. The replace is therefore
/// NOT scoped per leaf: a pattern can match across a value's serialized
/// boundaries (into quotes, separators, or adjacent values). This matches
/// the historical behavior and is kept deliberately; [`replace_in_leaves`]
/// is the strict alternative.
///
/// Because a boundary-crossing match can corrupt the serialized form, this
/// returns an error when the replaced text no longer parses, or no longer
/// parses into a container. An empty `from` replaces nothing.
pub fn replace_serialized(haystack: &Branch, from: &str, to: &str) -> Result<Branch> {
    if from.is_empty() {
        return Ok(haystack.clone());
    }
    let text = Node::Branch(haystack.clone()).to_json().to_string();
    let replaced = text.replace(from, to);
    let value: serde_json::Value = serde_json::from_str(&replaced)?;
    match Node::from_json(&value) {
        Node::Branch(b) => Ok(b),
        Node::Leaf(_) => Err(NestError::ShapeLost),
    }
}
