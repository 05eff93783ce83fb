//! Error types for loading and querying records

use std::path::PathBuf;
use thiserror::Error;

/// Failure to populate one collection from its source.
///
/// Load failures are never fatal: the affected collection is reset to empty
/// and the error is handed back to the caller for reporting.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{kind} source unavailable at {}: {source}", path.display())]
    SourceUnavailable {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {kind} source {}: {message}", path.display())]
    Decode {
        kind: &'static str,
        path: PathBuf,
        message: String,
    },
}

impl LoadError {
    pub(crate) fn decode(
        kind: &'static str,
        path: impl Into<PathBuf>,
        message: impl ToString,
    ) -> Self {
        Self::Decode {
            kind,
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// True when the source was missing or could not be read at all
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }

    /// Path of the source that failed
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::SourceUnavailable { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

/// Rejected query input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Search query cannot be empty")]
    InvalidQuery,
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_is_distinguishable() {
        let err = LoadError::SourceUnavailable {
            kind: "equipment",
            path: PathBuf::from("data/missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.is_source_unavailable());
        assert_eq!(err.path(), &PathBuf::from("data/missing.csv"));
        assert!(err.to_string().contains("data/missing.csv"));

        let err = LoadError::decode("maintenance", "logs.json", "expected `[`");
        assert!(!err.is_source_unavailable());
        assert!(err.to_string().starts_with("failed to decode maintenance source logs.json"));
    }
}
