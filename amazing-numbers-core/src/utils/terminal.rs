//! # Terminal Input Helper
//!
//! Prompts for request lines and prints answers. [`Terminal`] is generic over
//! its reader and writer so a scripted session can stand in for the console.
//!
//! ## Example
//! ```rust,no_run
//! use amazing_numbers_core::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! while let Some(line) = terminal.ask("Enter a request: ").unwrap() {
//!     terminal.say(&format!("You typed {line}")).unwrap();
//! }
//! ```

use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` (without a newline) and reads one line.
    ///
    /// Returns the trimmed line, or `None` once the input is exhausted.
    /// Bytes that are not valid UTF-8 become `U+FFFD`, so a garbled line is
    /// answered like any other malformed request.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = Vec::new();
        match self.input.read_until(b'\n', &mut answer)? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&answer).trim().to_string())),
        }
    }

    /// Prints `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Gives back the writer, e.g. to inspect a captured session.
    pub fn into_output(self) -> W {
        self.output
    }
}
