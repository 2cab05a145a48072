//! Error types for docs-cache-core operations.
//!
//! Every fallible operation in the library returns [`Result<T>`]. Failures coming out of the
//! content store or the cache service are not recovered locally: the warm loop propagates them
//! and the invocation ends. Artifacts written before the failure stay on disk.
//!
//! Version resolution has its own error type, [`ResolveError`](crate::ResolveError), because
//! both of its cases are expected outcomes that the CLI reports without a stack of context.

use thiserror::Error;

/// The main error type for docs-cache-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading sources, listing directories, and writing to the output stream.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Markdown could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Cache storage operation failed.
    ///
    /// Raised when an artifact cannot be written, renamed into place, or read back.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource was not found in the content store.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A version or page identifier cannot be mapped onto a safe filesystem path.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Artifact serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for [`std::result::Result`] with our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_the_cause_as_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert_eq!(err.to_string(), "IO error");
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("denied"));
    }

    #[test]
    fn display_includes_kind_prefix() {
        let err = Error::InvalidPath("../etc".into());
        assert_eq!(err.to_string(), "Invalid path: ../etc");
    }
}
