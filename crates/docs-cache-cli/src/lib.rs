//! docs-cache CLI - warm the rendered cache for downloaded documentation
//!
//! This is the library entry point for the `docs-cache` binary. Argument parsing, logging and
//! configuration live here; the warm loop itself is in `docs-cache-core`.
use anyhow::{Context, Result};
use clap::Parser;
use docs_cache_core::{CacheStatus, Config, DocsCache, FsContentStore};
use std::process::ExitCode;
use tracing::{debug, info};

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

use crate::cli::Cli;
use crate::commands::{CacheOutcome, CacheRequest, execute_cache};
use crate::error::CliError;
use crate::output::ConsoleReporter;
use crate::utils::initialize_logging;

/// Execute the docs-cache CLI with the currently configured environment.
///
/// # Errors
///
/// Returns an error if configuration is invalid, or if listing, rendering, or writing fails.
/// Missing content and unknown versions are reported on stdout and surface as a non-zero
/// [`ExitCode`], not as errors. A closed stdout surfaces as an error that
/// [`error::is_broken_pipe`] recognises.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    initialize_logging(&cli)?;

    let config = load_config(&cli).map_err(CliError::usage)?;

    let store = FsContentStore::new(&config.paths.content_root);
    let mut cache = DocsCache::new(
        store.clone(),
        &config.paths.cache_root,
        config.pages.clone(),
    )
    .context("initializing markdown parser")?;
    debug!(
        "Content root: {}, cache root: {}",
        store.root().display(),
        cache.root().display()
    );
    let mut reporter = ConsoleReporter::stdout();

    let request = CacheRequest {
        version: cli.version.as_deref(),
        list_versions: cli.versions,
    };
    let outcome = execute_cache(
        request,
        &store,
        &mut cache,
        &mut reporter,
        &config.pages.extension,
        store.root(),
    )
    .map_err(CliError::internal)?;

    if let CacheOutcome::Warmed(report) = &outcome {
        info!(
            "Warmed {} version(s), {} page(s) in {}ms ({} rendered, {} cached, {} missing)",
            report.versions.len(),
            report.page_count(),
            report.elapsed().as_millis(),
            report.count(CacheStatus::Rendered),
            report.count(CacheStatus::Hit),
            report.count(CacheStatus::Missing),
        );
    }

    Ok(outcome.exit_code())
}

/// Load configuration and apply the per-invocation path overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(dir) = &cli.content_dir {
        config.paths.content_root.clone_from(dir);
    }
    if let Some(dir) = &cli.cache_dir {
        config.paths.cache_root.clone_from(dir);
    }
    Ok(config)
}
