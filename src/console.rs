//! User-facing streams.
//!
//! Everything the library prints (dry-run plans, verbose lines, overwrite
//! prompts) goes through a [`Console`], and every confirmation is read from
//! it. The caller decides what the streams are: stdin/stdout for the
//! command line, in-memory buffers for tests.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Output sink plus confirmation input.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    input: &'a mut dyn BufRead,
}

impl<'a> Console<'a> {
    /// Wrap an output stream and an input stream.
    pub fn new(out: &'a mut dyn Write, input: &'a mut dyn BufRead) -> Self {
        Self { out, input }
    }

    /// Write one line to the output stream.
    pub fn line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")
    }

    /// Ask whether `path` may be overwritten.
    ///
    /// Blocks until a line (or end of input) is read. Only `y` or `yes`,
    /// in any case and with surrounding whitespace, counts as consent.
    pub fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool> {
        write!(self.out, "overwrite '{}'? (y/n): ", path.display())?;
        self.out.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

impl fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

/// Interpret a prompt answer.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}
