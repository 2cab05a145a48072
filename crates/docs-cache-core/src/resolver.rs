//! Version resolution.
//!
//! Decides which versions an invocation processes: every discovered version, or the single one
//! the operator asked for. Both failure cases are caught before any cache work starts.

use thiserror::Error;

/// Why a target set could not be produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The content store has no version namespaces; the ingestion step has not run.
    #[error("no documentation versions are available")]
    NoContentAvailable,

    /// The requested version is not one of the discovered namespaces.
    #[error("invalid version specified - '{requested}'")]
    UnknownVersion {
        /// The version the operator asked for.
        requested: String,
        /// Every discovered version, in discovery order.
        available: Vec<String>,
    },
}

/// Resolve the ordered target set for one invocation.
///
/// An empty `discovered` set is always [`ResolveError::NoContentAvailable`], whatever was
/// requested.
pub fn resolve(
    requested: Option<&str>,
    discovered: &[String],
) -> Result<Vec<String>, ResolveError> {
    if discovered.is_empty() {
        return Err(ResolveError::NoContentAvailable);
    }

    match requested {
        None => Ok(discovered.to_vec()),
        Some(version) if discovered.iter().any(|v| v == version) => Ok(vec![version.to_string()]),
        Some(version) => Err(ResolveError::UnknownVersion {
            requested: version.to_string(),
            available: discovered.to_vec(),
        }),
    }
}
