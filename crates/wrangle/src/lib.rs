//! # Wrangle - Data-Wrangling Helpers
//!
//! Wrangle bundles four small, independent helper crates behind one
//! import:
//!
//! - **nest** - recursive search and transform over nested heterogeneous
//!   containers: key/value existence, first-match key lookup, substring
//!   search, flattening, leaf mapping, and string replacement
//! - **text** - string, path, and URL normalization: BOM stripping,
//!   truncation, slash handling, host extraction, file-name splitting
//! - **contact** - email validation and Russian phone-number normalization
//! - **config** - JSON/YAML configuration loading with key prefixing and
//!   dotted-path lookup
//!
//! Everything is a pure function or a plain owned value; absence of a
//! result is a sentinel (`false`, `None`), never an error. The only
//! fallible surfaces are config loading and serialized replacement.
//!
//! ## Quick Start
//!
//! ```rust
//! use wrangle::{find_key, key_exists, Branch, Key, Scalar};
//!
//! // {user: {name: "alice", id: 7}, active: true}
//! let mut user = Branch::new();
//! user.insert("name", "alice");
//! user.insert("id", 7i64);
//!
//! let mut root = Branch::new();
//! root.insert("user", user);
//! root.insert("active", true);
//!
//! assert!(key_exists(&Scalar::from("name"), &root));
//! assert_eq!(
//!     find_key(&Scalar::from("alice"), &root),
//!     Some(Key::Name("name".into()))
//! );
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust
//! use wrangle::{Config, Format};
//!
//! let mut config = Config::new();
//! config
//!     .load_str("db:\n  host: localhost\n", Format::Yaml, Some("app"))
//!     .unwrap();
//!
//! assert_eq!(config.get_str("app.db.host"), Some("localhost"));
//! ```

// Container model and traversal
pub use wrangle_nest::{
    find_key, find_key_containing, flatten, key_exists, map_leaves, replace_in_leaves,
    replace_serialized, value_exists, Branch, Find, Key, NestError, Node, Scalar,
};

// String, path, and URL helpers
pub use wrangle_text::{
    ensure_leading_slash, ensure_trailing_slash, file_ext_only, file_stem_only, host_only,
    host_with_scheme, host_with_scheme_and_path, strip_bom, strip_trailing_slash, truncate_chars,
    truncate_width,
};

// Contact validation
pub use wrangle_contact::{is_valid_email, normalize_ru_phone};

// Configuration store
pub use wrangle_config::{Config, ConfigError, Format};

// Whole-crate aliases for qualified access
pub use wrangle_config as config;
pub use wrangle_contact as contact;
pub use wrangle_nest as nest;
pub use wrangle_text as text;
