//! Line-oriented console
//!
//! Every prompt consumes exactly one input line, whatever was typed on it.
//! Numbers are read from the start of the line; anything after them is
//! discarded with the rest of the line.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use hms_core::record::parse_int_prefix;

use crate::error::{PortalError, Result};

/// Prompt-and-read wrapper over an input/output pair
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap `input` and `output`; screen clearing is off until enabled
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
            buf: Vec::new(),
        }
    }

    /// Clear the terminal before each menu
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Read one line with its terminator removed.
    ///
    /// Returns [`PortalError::InputClosed`] at end of input.
    pub fn read_line(&mut self) -> Result<String> {
        self.buf.clear();
        let read = self.input.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Err(PortalError::InputClosed);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Print `prompt` and read the answer, trimmed
    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self.read_line()?.trim().to_string())
    }

    /// Print `prompt` and read an integer.
    ///
    /// `None` means the line did not start with a number; the line is
    /// consumed either way.
    pub fn prompt_int(&mut self, prompt: &str) -> Result<Option<i64>> {
        let answer = self.prompt(prompt)?;
        Ok(parse_int_prefix(&answer))
    }

    /// Wait for the user to press Enter
    pub fn pause(&mut self) -> Result<()> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Clear the terminal, if enabled
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Consume the console and return its output
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_consumes_one_line() {
        let mut console = console("  Alice  \nnext\n");
        assert_eq!(console.prompt("Name: ").unwrap(), "Alice");
        assert_eq!(console.read_line().unwrap(), "next");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Name: ");
    }

    #[test]
    fn test_prompt_int_discards_rest_of_line() {
        let mut console = console("12abc\nhello\n");
        assert_eq!(console.prompt_int("ID: ").unwrap(), Some(12));
        assert_eq!(console.read_line().unwrap(), "hello");
    }

    #[test]
    fn test_prompt_int_rejects_non_numeric() {
        let mut console = console("abc\n\n");
        assert_eq!(console.prompt_int("ID: ").unwrap(), None);
        assert_eq!(console.prompt_int("ID: ").unwrap(), None);
    }

    #[test]
    fn test_end_of_input_is_input_closed() {
        let mut console = console("");
        assert!(matches!(console.read_line(), Err(PortalError::InputClosed)));
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let mut console = console("first\r\nlast");
        assert_eq!(console.read_line().unwrap(), "first");
        assert_eq!(console.read_line().unwrap(), "last");
        assert!(matches!(console.read_line(), Err(PortalError::InputClosed)));
    }

    #[test]
    fn test_clear_disabled_writes_nothing() {
        let mut console = console("");
        console.clear().unwrap();
        assert!(console.into_output().is_empty());
    }
}
