//! # Line Input
//!
//! The input side of a session: whole lines of text and integer tokens.

use std::io::{self, BufRead};

use roster_common::error::{Result, RosterError};

/// Defines the contract for reading user input line by line.
pub trait LineSource {
    /// Reads the next line without its terminator.
    ///
    /// # Returns
    /// * `Some(String)` - The line that was read.
    /// * `None` - If the input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Reads the next line, failing when the input is exhausted.
    ///
    /// `expected` names what the caller was waiting for and ends up in the error.
    fn read_text(&mut self, expected: &'static str) -> Result<String> {
        self.next_line()?
            .ok_or(RosterError::EndOfInput { expected })
    }

    /// Reads the first integer token, skipping blank lines.
    ///
    /// Anything after the token on the same line is discarded.
    fn read_int(&mut self, expected: &'static str) -> Result<i64> {
        loop {
            let line: String = self.read_text(expected)?;
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            return token.parse::<i64>().map_err(|_| RosterError::NotAnInteger {
                input: token.to_string(),
            });
        }
    }
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf: String = String::new();
        if BufRead::read_line(self, &mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len: usize = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }
}
