//! docs-cache - warm the rendered documentation cache
//!
//! Thin wrapper around [`docs_cache_cli::run`] that maps failures to exit codes.

use colored::Colorize;
use docs_cache_cli::error::{exit_code_from_error, is_broken_pipe};
use std::process::ExitCode;

fn main() -> ExitCode {
    match docs_cache_cli::run() {
        Ok(code) => code,
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red());
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
