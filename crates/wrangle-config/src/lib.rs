//! Configuration loading with key prefixing and dotted-path lookup.
//!
//! Sources (JSON or YAML, from files or strings) parse into the
//! `wrangle-nest` container model and flatten into a dotted-path table:
//! every leaf and every intermediate branch gets its own path, optionally
//! nested under a prefix.
//!
//! ```rust
//! use wrangle_config::{Config, Format};
//!
//! let mut config = Config::new();
//! config
//!     .load_str("db:\n  host: localhost\n", Format::Yaml, Some("app"))
//!     .unwrap();
//!
//! assert_eq!(config.get_str("app.db.host"), Some("localhost"));
//! ```

mod error;
mod format;
mod store;

pub use error::{ConfigError, Result};
pub use format::Format;
pub use store::Config;
