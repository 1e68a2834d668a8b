//! Console output: plain text plus three ANSI operations.
//!
//! Lines end in `"\r\n"` because raw mode turns off the terminal's own
//! newline translation. The only control sequences emitted are clear
//! current line, clear screen and relative horizontal cursor moves.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::QueueableCommand;
use crossterm::cursor::{MoveLeft, MoveRight};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

/// Line terminator for raw-mode output.
pub const NEWLINE: &str = "\r\n";

/// Terminal output sink.
pub struct Console {
    out: Box<dyn Write>,
}

impl Console {
    pub fn new(out: impl Write + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    /// Console writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Write text as-is.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.write_str(NEWLINE)
    }

    /// Write `text` followed by a newline; embedded `\n` become `\r\n`.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        let text = text.to_string();
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline()?;
            }
            self.write_str(part.strip_suffix('\r').unwrap_or(part))?;
        }
        self.newline()
    }

    /// Erase the current line and return to its first column.
    pub fn clear_line(&mut self) -> io::Result<()> {
        self.out
            .queue(Clear(ClearType::CurrentLine))?
            .queue(Print('\r'))?;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::All))?;
        Ok(())
    }

    /// Move the cursor `delta` columns (negative is left). Zero is a no-op.
    pub fn move_cursor(&mut self, delta: isize) -> io::Result<()> {
        // One escape moves at most u16::MAX columns.
        let mut remaining = delta.unsigned_abs();
        while remaining > 0 {
            let columns = u16::try_from(remaining).unwrap_or(u16::MAX);
            if delta > 0 {
                self.out.queue(MoveRight(columns))?;
            } else {
                self.out.queue(MoveLeft(columns))?;
            }
            remaining -= usize::from(columns);
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

// ============================================================================
// Capture
// ============================================================================

/// In-memory writer whose contents stay readable after being handed to a
/// [`Console`].
#[derive(Clone, Debug, Default)]
pub struct Capture(Rc<RefCell<Vec<u8>>>);

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
