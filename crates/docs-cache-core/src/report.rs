//! Output primitives used while warming.
//!
//! The orchestrator only talks to a [`Reporter`]; the CLI supplies a terminal implementation and
//! tests record what was written.

use std::fmt::Display;
use std::io;

/// Line-oriented progress sink.
pub trait Reporter {
    /// Write text without a trailing newline. Implementations flush so the text shows up
    /// before the next (possibly slow) operation.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write an informational line.
    fn info(&mut self, line: &str) -> io::Result<()>;

    /// Write an error line.
    fn error(&mut self, line: &str) -> io::Result<()>;

    /// Write a plain line with no styling.
    fn line(&mut self, line: &str) -> io::Result<()> {
        self.write(line)?;
        self.write("\n")
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn info(&mut self, line: &str) -> io::Result<()> {
        (**self).info(line)
    }

    fn error(&mut self, line: &str) -> io::Result<()> {
        (**self).error(line)
    }

    fn line(&mut self, line: &str) -> io::Result<()> {
        (**self).line(line)
    }
}

/// Right-align `value` in a field of `width` characters. Longer values are left as they are.
pub fn pad_left(value: impl Display, width: usize) -> String {
    format!("{value:>width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits_pad_to_two() {
        for n in 1..=9 {
            let padded = pad_left(n, 2);
            assert_eq!(padded.len(), 2);
            assert_eq!(padded, format!(" {n}"));
        }
    }

    #[test]
    fn wide_values_are_not_truncated() {
        assert_eq!(pad_left(10, 2), "10");
        assert_eq!(pad_left(123, 2), "123");
    }

    #[test]
    fn pads_strings_too() {
        assert_eq!(pad_left("ab", 4), "  ab");
    }
}
