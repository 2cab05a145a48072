//! CLI error handling with semantic exit codes.
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Versions listed or cache warmed |
//! | 1 | `NoContent` | No documentation has been downloaded |
//! | 1 | `UnknownVersion` | Requested version does not exist |
//! | 1 | `Internal` | Store, cache, or output failure during a run |
//! | 2 | `Usage` | Invalid arguments or configuration |
//!
//! A closed stdout (`docs-cache | head`) is not a failure; [`is_broken_pipe`] lets `main` exit 0.
//!
//! `NoContent` and `UnknownVersion` share code 1 for compatibility with existing deploy
//! scripts; the printed message tells them apart.

use std::fmt;
use std::io;
use std::process::ExitCode;

/// Exit code when no documentation has been downloaded.
pub const EXIT_DOCS_MISSING: u8 = 1;
/// Exit code when the requested version does not exist.
pub const EXIT_VERSION_INVALID: u8 = 1;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unexpected failure while listing, rendering, or writing (exit code 1).
    Internal,

    /// Invalid arguments or configuration (exit code 2).
    Usage,

    /// The content store has no versions (exit code 1).
    NoContent,

    /// The requested version is not in the content store (exit code 1).
    UnknownVersion,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::Usage => 2,
            Self::NoContent => EXIT_DOCS_MISSING,
            Self::UnknownVersion => EXIT_VERSION_INVALID,
        }
    }

    /// Create an `ExitCode` from this category.
    #[must_use]
    pub fn as_exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_code())
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NoContent => "no content",
            Self::UnknownVersion => "unknown version",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` so the full context chain is preserved for display.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Internal, source)
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.chain().nth(1)
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// Categorised errors keep their code; anything else is internal.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>()
        .map_or(ErrorCategory::Internal.exit_code(), CliError::exit_code)
}

/// Whether the failure was caused by the reader of stdout going away.
#[must_use]
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.downcast_ref::<CliError>().map_or_else(
            || {
                cause
                    .downcast_ref::<io::Error>()
                    .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
            },
            |cli| is_broken_pipe(&cli.source),
        )
    })
}
