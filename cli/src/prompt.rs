//! Whitespace-token reader over any buffered input.
//!
//! Several answers may share one line (`8 9`) or arrive one per line; both
//! read the same. Blank lines are skipped.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Pulls one whitespace-separated token at a time from `R`.
#[derive(Debug)]
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub const fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying reader.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
