//! Line input and the confirmation capability handed to commands.

use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question.
pub trait Confirm {
    /// Writes `question` to `out` and returns `true` only for an affirmative
    /// answer. End of input counts as "no".
    fn confirm(&mut self, out: &mut dyn Write, question: &str) -> io::Result<bool>;
}

/// Reads commands and confirmation answers from the same line source.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Next line without its terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}

impl<R: BufRead> Confirm for LineInput<R> {
    fn confirm(&mut self, out: &mut dyn Write, question: &str) -> io::Result<bool> {
        write!(out, "{question} (y/N): ")?;
        out.flush()?;
        let answer = self.next_line()?;
        if answer.is_none() {
            writeln!(out)?;
        }
        Ok(answer.as_deref().is_some_and(is_affirmative))
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
