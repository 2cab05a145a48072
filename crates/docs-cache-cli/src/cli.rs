//! # CLI Structure and Argument Parsing
//!
//! `docs-cache` has a single command surface:
//!
//! ```bash
//! # Warm every downloaded version
//! docs-cache
//!
//! # Warm one version
//! docs-cache 11.x
//!
//! # List the versions that can be warmed
//! docs-cache --versions
//! ```
//!
//! Paths default to the configuration file and can be overridden per invocation with flags or
//! the matching `DOCS_CACHE_*` environment variables.

use clap::Parser;
use std::path::PathBuf;

/// Main CLI structure for the `docs-cache` command
#[derive(Parser, Clone, Debug)]
#[command(name = "docs-cache")]
#[command(version)]
#[command(about = "Cache documentation markdown", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Documentation version to warm (all versions when omitted)
    #[arg(id = "target_version", value_name = "VERSION")]
    pub version: Option<String>,

    /// List all available versions and exit
    #[arg(long)]
    pub versions: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress informational log messages (only show errors)
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Path to the configuration file
    #[arg(long, value_name = "PATH", env = "DOCS_CACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root of the downloaded documentation (overrides `paths.content_root`)
    #[arg(long, value_name = "DIR", env = "DOCS_CACHE_CONTENT_DIR")]
    pub content_dir: Option<PathBuf>,

    /// Root of the rendered cache (overrides `paths.cache_root`)
    #[arg(long, value_name = "DIR", env = "DOCS_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_version() {
        let cli = Cli::try_parse_from(["docs-cache", "11.x"]).unwrap();
        assert_eq!(cli.version.as_deref(), Some("11.x"));
        assert!(!cli.versions);
    }

    #[test]
    fn positional_does_not_shadow_version_flag() {
        let err = Cli::try_parse_from(["docs-cache", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

        let cli = Cli::try_parse_from(["docs-cache", "version"]).unwrap();
        assert_eq!(cli.version.as_deref(), Some("version"));
    }

    #[test]
    fn versions_flag_accepts_positional() {
        let cli = Cli::try_parse_from(["docs-cache", "11.x", "--versions"]).unwrap();
        assert!(cli.versions);
        assert_eq!(cli.version.as_deref(), Some("11.x"));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["docs-cache", "-q", "-v"]).is_err());
    }
}
