//! Error types for handbook operations
//!
//! Navigation, disclosure and slide derivation never fail. Errors only
//! arise at the edges: parsing user input and loading external content.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for handbook operations
#[derive(Error, Debug)]
pub enum HandbookError {
    /// Input did not name a known staff rank
    #[error("Unknown rank: {0} (expected helper, junior moderator or moderator)")]
    UnknownRank(String),

    /// Input did not name a known walkthrough key
    #[error("Unknown key: {0} (expected ArrowRight, ArrowLeft or Escape)")]
    UnknownKey(String),

    /// Shell input did not parse as a command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Content file could not be read
    #[error("Failed to read content from {path}: {source}")]
    ContentIo {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Content did not match the handbook schema
    #[error("Invalid content: {0}")]
    ContentFormat(#[from] serde_json::Error),

    /// Supplied content has no sections
    #[error("Content has no sections")]
    EmptyContent,

    /// Two sections in supplied content share an id
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),
}

/// Result type alias for handbook operations
pub type Result<T> = std::result::Result<T, HandbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_rank_message_lists_choices() {
        let err = HandbookError::UnknownRank("admin".to_string());
        let msg = err.to_string();
        assert!(msg.contains("admin"));
        assert!(msg.contains("junior moderator"));
    }

    #[test]
    fn test_content_format_from_serde() {
        let parse = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: HandbookError = parse.into();
        assert!(matches!(err, HandbookError::ContentFormat(_)));
        assert!(err.to_string().starts_with("Invalid content:"));
    }
}
