//! Line-oriented console I/O
//!
//! Wraps an input reader and an output writer so the interactive shell can
//! be driven from a terminal or from scripted input in tests.

use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use crate::crypto::SecureString;
use crate::error::{DirectoryError, DirectoryResult};

/// Console used by the interactive shell
pub struct Console<R, W> {
    input: R,
    output: W,
    /// Read secrets through the terminal without echo
    mask_secrets: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process standard streams
    ///
    /// Secrets are masked only when stdin is a terminal.
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        Self::new(stdin.lock(), io::stdout()).with_masked_secrets(interactive)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over arbitrary streams, secrets echoed
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            mask_secrets: false,
        }
    }

    /// Toggle echo-free password entry
    pub fn with_masked_secrets(mut self, mask: bool) -> Self {
        self.mask_secrets = mask;
        self
    }

    /// Consume the console, returning the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line
    pub fn say(&mut self, message: impl Display) -> DirectoryResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print a section banner
    pub fn header(&mut self, title: &str) -> DirectoryResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== {} ===", title)?;
        Ok(())
    }

    /// Print a prompt without a trailing newline
    pub fn prompt(&mut self, prompt: &str) -> DirectoryResult<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt and read one line of free text
    ///
    /// Only the line terminator is removed; embedded and surrounding spaces
    /// are kept.
    pub fn read_line(&mut self, prompt: &str) -> DirectoryResult<String> {
        self.prompt(prompt)?;
        self.next_line()
    }

    /// Prompt for a password
    pub fn read_secret(&mut self, prompt: &str) -> DirectoryResult<SecureString> {
        if !self.mask_secrets {
            return self.read_line(prompt).map(SecureString::from);
        }

        self.output.flush()?;
        rpassword::prompt_password(prompt)
            .map(SecureString::from)
            .map_err(|e| match e.kind() {
                io::ErrorKind::UnexpectedEof => DirectoryError::EndOfInput,
                _ => DirectoryError::Io(format!("Failed to read password: {}", e)),
            })
    }

    /// Prompt for an integer
    ///
    /// Blank lines are skipped. The first token of the next non-blank line is
    /// parsed and the rest of that line discarded; `None` means it was not a
    /// number.
    pub fn read_number(&mut self, prompt: &str) -> DirectoryResult<Option<i64>> {
        self.prompt(prompt)?;
        loop {
            let line = self.next_line()?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.parse().ok());
            }
        }
    }

    /// Prompt for a yes/no answer
    ///
    /// Blank lines are skipped; any answer starting with `y` or `Y` confirms.
    pub fn read_confirmation(&mut self, prompt: &str) -> DirectoryResult<bool> {
        self.prompt(prompt)?;
        loop {
            let line = self.next_line()?;
            if let Some(first) = line.trim_start().chars().next() {
                return Ok(matches!(first, 'y' | 'Y'));
            }
        }
    }

    fn next_line(&mut self) -> DirectoryResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DirectoryError::EndOfInput);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
