//! Nest - recursive search and transform over nested heterogeneous containers.
//!
//! Nest models the classic "array of arrays" shape: an insertion-ordered
//! container whose keys mix integer indexes and string names, and whose
//! values are scalars or further containers, nested to arbitrary depth.
//! Over that model it provides:
//!
//! - Key and value existence checks, with case folding, strict typing, and
//!   recursion control
//! - First-match key lookup by value or by substring, depth-first
//! - Flattening into single-level `parent[child]` path maps
//! - Structure-preserving leaf mapping and string replacement
//!
//! # Quick Start
//!
//! ```rust
//! use wrangle_nest::{find_key, flatten, key_exists, Branch, Find, Key, Node, Scalar};
//!
//! // {server: {host: "db.local", port: 5432}, retries: 3}
//! let mut server = Branch::new();
//! server.insert("host", "db.local");
//! server.insert("port", 5432i64);
//!
//! let mut root = Branch::new();
//! root.insert("server", server);
//! root.insert("retries", 3i64);
//!
//! // Keys are found at any depth.
//! assert!(key_exists(&Scalar::from("port"), &root));
//!
//! // Searches return the matching key; None is the not-found sentinel.
//! assert_eq!(
//!     find_key(&Scalar::from("db.local"), &root),
//!     Some(Key::Name("host".into()))
//! );
//!
//! // Flattening synthesizes bracketed paths.
//! let flat = flatten(&Node::Branch(root), None);
//! assert_eq!(flat[0].0, "server[host]");
//! ```
//!
//! # Comparison Semantics
//!
//! Loose comparison (the default) casts both sides to a canonical string
//! form, so `Int(1)`, `Str("1")` and `Bool(true)` all compare equal.
//! [`Find::strict`] requires matching runtime types first, and
//! [`Find::case_insensitive`] folds case; the four combinations are
//! mutually exclusive per call. An empty needle (`Null` or `""`) never
//! matches anything.
//!
//! Traversal is depth-first in insertion order and stops at the first
//! match. There is no global minimum or exhaustive collection.

mod error;
mod find;
mod flatten;
mod json;
mod key;
mod node;
mod scalar;
mod transform;

pub use error::{NestError, Result};
pub use find::{find_key, find_key_containing, key_exists, value_exists, Find};
pub use flatten::flatten;
pub use key::Key;
pub use node::{Branch, Node};
pub use scalar::Scalar;
pub use transform::{map_leaves, replace_in_leaves, replace_serialized};
