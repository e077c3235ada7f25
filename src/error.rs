//! Error types for blockmark.
//!
//! Conversion itself never fails: malformed input degrades through the
//! parser fallback chain. The only fallible surface is re-parsing block
//! markup, which validates delimiter grammar and attribute JSON.

use thiserror::Error;

/// Errors from re-parsing a block markup document.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// An opening delimiter with no matching closer
    #[error("unterminated block: missing closer for wp:{0}")]
    Unterminated(String),

    /// A closer naming a different block than the last opener
    #[error("mismatched closer: expected /wp:{expected}, found /wp:{found}")]
    MismatchedCloser {
        /// Block name of the unclosed opener
        expected: String,
        /// Block name the closer carried
        found: String,
    },

    /// A delimiter comment that does not follow the `wp:name` grammar
    #[error("malformed block delimiter: {0:?}")]
    MalformedDelimiter(String),

    /// Attribute object that is not valid JSON
    #[error("invalid attributes for wp:{name}: {source}")]
    Attrs {
        /// Block name carrying the bad attributes
        name: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

/// Result type alias for block markup operations.
pub type MarkupResult<T> = Result<T, MarkupError>;

impl MarkupError {
    /// Create a malformed-delimiter error from the offending comment text.
    pub fn malformed(comment: impl Into<String>) -> Self {
        Self::MalformedDelimiter(comment.into())
    }

    /// Create an attribute error for a named block.
    pub fn attrs(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Attrs {
            name: name.into(),
            source,
        }
    }
}
