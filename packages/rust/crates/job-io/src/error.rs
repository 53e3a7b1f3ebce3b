//! Error types for store file I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the store file helpers.
///
/// Every variant carries the path it concerns so callers can report it as-is.
#[derive(Error, Debug)]
pub enum IoError {
    /// File does not exist (or cannot be stat'ed).
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File exceeds the configured read limit.
    #[error("file too large: {} is {len} bytes (limit: {limit})", .path.display())]
    TooLarge {
        /// Offending file.
        path: PathBuf,
        /// Actual size in bytes.
        len: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// Low-level I/O error from std::io, tagged with what was being attempted.
    #[error("failed to {action} {}: {source}", .path.display())]
    Access {
        /// Short verb phrase, e.g. "open", "rename temp file onto".
        action: &'static str,
        /// File the action targeted.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    pub(crate) fn access(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Access {
            action,
            path,
            source,
        }
    }
}
