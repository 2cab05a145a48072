//! Cache warming command implementation

use anyhow::{Context, Result};
use docs_cache_core::{
    CacheService, ContentStore, ResolveError, Reporter, WarmReport, Warmer, resolve,
};
use std::path::Path;
use std::process::ExitCode;

use crate::error::ErrorCategory;

/// What the operator asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheRequest<'a> {
    /// Single version to warm; every version when `None`.
    pub version: Option<&'a str>,
    /// List versions instead of warming.
    pub list_versions: bool,
}

/// High-level outcome produced by [`execute_cache`]. Useful for assertions in tests.
#[derive(Debug)]
pub enum CacheOutcome {
    /// The content store had no versions.
    NoContent,
    /// Versions were listed.
    Listed(Vec<String>),
    /// The requested version does not exist.
    InvalidVersion {
        /// The version that was asked for.
        requested: String,
    },
    /// Cache warmed for the resolved versions.
    Warmed(WarmReport),
}

impl CacheOutcome {
    /// Failure category, if the outcome is not a success.
    #[must_use]
    pub const fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::NoContent => Some(ErrorCategory::NoContent),
            Self::InvalidVersion { .. } => Some(ErrorCategory::UnknownVersion),
            Self::Listed(_) | Self::Warmed(_) => None,
        }
    }

    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        self.category()
            .map_or(ExitCode::SUCCESS, ErrorCategory::as_exit_code)
    }
}

/// Core command implementation with injectable dependencies to enable deterministic tests.
///
/// The empty-store check runs first, so `--versions` against an empty store still reports
/// missing content.
///
/// # Errors
///
/// Returns an error if the store cannot be listed, a cache call fails, or output cannot be
/// written.
pub fn execute_cache<S, C, R>(
    request: CacheRequest<'_>,
    store: &S,
    cache: &mut C,
    reporter: &mut R,
    extension: &str,
    content_root: &Path,
) -> Result<CacheOutcome>
where
    S: ContentStore,
    C: CacheService,
    R: Reporter,
{
    let versions = store
        .list_versions()
        .with_context(|| format!("listing versions in {}", content_root.display()))?;

    if versions.is_empty() {
        report_no_content(reporter, content_root)?;
        return Ok(CacheOutcome::NoContent);
    }

    if request.list_versions {
        list_versions(reporter, &versions)?;
        return Ok(CacheOutcome::Listed(versions));
    }

    let targets = match resolve(request.version, &versions) {
        Ok(targets) => targets,
        Err(ResolveError::NoContentAvailable) => {
            report_no_content(reporter, content_root)?;
            return Ok(CacheOutcome::NoContent);
        },
        Err(ResolveError::UnknownVersion {
            requested,
            available,
        }) => {
            reporter.error(&format!("Invalid version specified - '{requested}'"))?;
            list_versions(reporter, &available)?;
            return Ok(CacheOutcome::InvalidVersion { requested });
        },
    };

    let report = Warmer::new(store, cache, reporter, extension)
        .run(&targets)
        .context("warming documentation cache")?;
    Ok(CacheOutcome::Warmed(report))
}

fn report_no_content<R: Reporter>(reporter: &mut R, content_root: &Path) -> Result<()> {
    reporter.error(&format!(
        "Run the documentation ingestion step first to download documentation markup \
         (no versions found in {})",
        content_root.display()
    ))?;
    Ok(())
}

fn list_versions<R: Reporter>(reporter: &mut R, versions: &[String]) -> Result<()> {
    reporter.info("Available versions:")?;
    for version in versions {
        reporter.line(version)?;
    }
    Ok(())
}
