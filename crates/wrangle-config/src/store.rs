//! The configuration store.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use wrangle_nest::Node;

use crate::error::{ConfigError, Result};
use crate::format::Format;

/// A dotted-path lookup table over loaded configuration trees.
///
/// Every intermediate branch AND every leaf is stored under its dotted
/// path, so `get("db")` yields a whole sub-container while
/// `get("db.host")` yields the leaf inside it.
///
/// A `Config` is an explicit owned value: create one, load sources into
/// it, and pass it (or `&Config`) where it is needed. Shared references
/// are thread-safe since nothing is mutated after loading.
///
/// # Example
///
/// ```
/// use wrangle_config::{Config, Format};
///
/// let mut config = Config::new();
/// config
///     .load_str(r#"{"db": {"host": "localhost", "port": 5432}}"#, Format::Json, Some("app"))
///     .unwrap();
///
/// assert_eq!(config.get_str("app.db.host"), Some("localhost"));
/// assert_eq!(config.get_int("app.db.port"), Some(5432));
/// assert!(config.get("app.db").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    data: HashMap<String, Node>,
}

impl Config {
    /// Creates an empty store.
    pub fn new() -> Self {
        Config::default()
    }

    /// Loads a config file, picking the format by extension.
    ///
    /// With `prefix_filename`, keys nest under the file's stem; a custom
    /// prefix nests in front of that (`custom.filename.key`).
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        prefix_filename: bool,
        custom_prefix: Option<&str>,
    ) -> Result<()> {
        let path = path.as_ref();
        let format = Format::from_path(path).ok_or_else(|| {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            ConfigError::UnsupportedFormat(ext)
        })?;

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut parts: Vec<&str> = Vec::new();
        if let Some(custom) = custom_prefix {
            parts.push(custom);
        }
        if prefix_filename {
            parts.push(&stem);
        }
        let prefix = if parts.is_empty() {
            None
        } else {
            Some(parts.join("."))
        };

        self.load_str(&text, format, prefix.as_deref())
    }

    /// Parses and loads source text in the given format.
    pub fn load_str(&mut self, text: &str, format: Format, prefix: Option<&str>) -> Result<()> {
        let node = format.parse(text)?;
        self.load_node(&node, prefix);
        Ok(())
    }

    /// Loads an in-memory container under an optional prefix.
    ///
    /// Each top-level entry is stored under `prefix.key` (or bare `key`),
    /// recursing so every nested path gets its own slot.
    pub fn load_node(&mut self, node: &Node, prefix: Option<&str>) {
        match node {
            Node::Branch(branch) => {
                for (key, child) in branch.entries() {
                    let path = match prefix {
                        Some(p) => format!("{p}.{key}"),
                        None => key.to_string(),
                    };
                    self.set(path, child);
                }
            }
            Node::Leaf(_) => {
                if let Some(p) = prefix {
                    self.set(p.to_string(), node);
                }
            }
        }
    }

    fn set(&mut self, path: String, node: &Node) {
        if let Node::Branch(branch) = node {
            for (key, child) in branch.entries() {
                self.set(format!("{path}.{key}"), child);
            }
        }
        self.data.insert(path, node.clone());
    }

    /// Looks up a node by dotted path.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.data.get(key)
    }

    /// Looks up a node, falling back to `default`.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Node) -> &'a Node {
        self.data.get(key).unwrap_or(default)
    }

    /// Looks up a string leaf by dotted path.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_scalar()?.as_str()
    }

    /// Looks up an integer leaf by dotted path.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_scalar()?.as_int()
    }

    /// Looks up a boolean leaf by dotted path.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_scalar()?.as_bool()
    }

    /// Returns `true` if the path is present.
    pub fn has_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of stored paths (branches and leaves both count).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing has been loaded.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The complete path table.
    pub fn all(&self) -> &HashMap<String, Node> {
        &self.data
    }
}
