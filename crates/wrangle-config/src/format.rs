//! Supported configuration source formats.

use std::path::Path;

use wrangle_nest::Node;

use crate::error::Result;

/// A parseable configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON documents (`.json`).
    Json,
    /// YAML documents (`.yaml`, `.yml`).
    Yaml,
}

impl Format {
    /// Picks the format for a file path by its extension.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    /// Parses source text into the container model.
    pub fn parse(self, text: &str) -> Result<Node> {
        let value: serde_json::Value = match self {
            Format::Json => serde_json::from_str(text)?,
            Format::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(Node::from_json(&value))
    }
}
