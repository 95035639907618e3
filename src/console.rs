//! Line-oriented text I/O the game talks through.

use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{instrument, trace};

/// Reads answers and writes text, one line at a time.
///
/// Calls block until the line is read or written.
pub trait Console {
    /// Shows `prompt` and reads one line without its line ending.
    ///
    /// Returns `None` when input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError>;
}

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl StdConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        // Invalid UTF-8 becomes U+FFFD and fails validation like any other bad input.
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            trace!("Input exhausted");
            return Ok(None);
        }

        let decoded = String::from_utf8_lossy(&bytes);
        let line = decoded.trim_end_matches(['\n', '\r']).to_string();
        trace!(%line, "Line read");
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}

/// Console I/O error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_ending_and_echoes_prompt() {
        let mut console = StdConsole::new(Cursor::new("5\r\nq\n"), Vec::new());

        assert_eq!(console.read_line("> ").unwrap(), Some("5".to_string()));
        assert_eq!(console.read_line("> ").unwrap(), Some("q".to_string()));
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(console.output().as_slice(), b"> > > ");
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut console = StdConsole::new(Cursor::new(b"\xff5\n7\n".to_vec()), Vec::new());

        assert_eq!(console.read_line("").unwrap(), Some("\u{FFFD}5".to_string()));
        assert_eq!(console.read_line("").unwrap(), Some("7".to_string()));
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut console = StdConsole::new(Cursor::new(""), Vec::new());
        console.write_line("Goodbye.").unwrap();
        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "Goodbye.\n");
    }
}
