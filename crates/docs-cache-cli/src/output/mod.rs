//! Terminal output for progress and status lines.

mod console;

pub use console::ConsoleReporter;
