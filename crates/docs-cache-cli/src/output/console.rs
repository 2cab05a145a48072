//! Colored terminal reporter.

use colored::Colorize;
use docs_cache_core::Reporter;
use std::io::{self, Write};

/// Writes progress to a terminal stream.
///
/// Info lines are green and error lines red; color is skipped when `colored` has been told to
/// stop (`--no-color`, `NO_COLOR`, or a non-tty stream).
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter bound to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Wrap an arbitrary writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    fn info(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line.green())?;
        self.out.flush()
    }

    fn error(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line.red())?;
        self.out.flush()
    }
}
