//! Error types for the nest crate.

use thiserror::Error;

/// Errors from the serialize-replace-deserialize operation.
///
/// Search and traversal never fail; absence of a match is a sentinel
/// return. Only [`replace_serialized`] can error, because a textual
/// replacement over the serialized form may leave it unparseable.
///
/// [`replace_serialized`]: crate::replace_serialized
#[derive(Debug, Error)]
pub enum NestError {
    /// The replaced text is no longer valid JSON.
    #[error("replacement corrupted the serialized form: {0}")]
    Corrupted(#[from] serde_json::Error),

    /// The replaced text parsed, but not back into a container.
    #[error("replacement collapsed the container into a scalar")]
    ShapeLost,
}

/// Result type for nest operations.
pub type Result<T> = std::result::Result<T, NestError>;
