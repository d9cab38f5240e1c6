// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input reader splitting a byte stream into lines and blank-line blocks.
//!
//! Lookahead uses `BufRead::fill_buf`, which exposes buffered bytes without
//! consuming them. A peeked byte therefore stays in the stream for whatever
//! unit is read next.

use crate::error::ReadError;
use std::io::{self, BufRead};

/// Reads logical units (lines and blocks) from a buffered stream.
#[derive(Debug)]
pub struct InputReader<R> {
    inner: R,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read one line, without its `\n` or `\r\n` terminator.
    ///
    /// End-of-stream terminates a final unterminated line. It is only an error
    /// when nothing was read at all. A stream failure part way through a line
    /// fails the whole line.
    pub fn read_line(&mut self) -> Result<String, ReadError> {
        let mut buf = Vec::new();
        if self.inner.read_until(b'\n', &mut buf)? == 0 {
            return Err(ReadError::EndOfInput);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        Ok(String::from_utf8(buf)?)
    }

    /// Read non-empty lines until a blank line or end-of-stream.
    ///
    /// The blank line is consumed and not included. A blank first line yields
    /// an empty block.
    pub fn read_block(&mut self) -> Result<Vec<String>, ReadError> {
        let mut lines = Vec::new();

        loop {
            let line = self.read_line()?;
            if line.is_empty() {
                break;
            }
            lines.push(line);

            match self.peek_byte() {
                Ok(Some(_)) => {}
                Ok(None) => break,
                // Nothing was consumed by the peek, so a persistent failure
                // resurfaces on the next read.
                Err(e) => {
                    tracing::debug!(error = %e, lines = lines.len(), "lookahead failed, closing block");
                    break;
                }
            }
        }

        Ok(lines)
    }

    /// Look at the next byte without consuming it; `None` at end-of-stream.
    pub fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Whether the stream has no more bytes.
    pub fn is_at_end(&mut self) -> io::Result<bool> {
        Ok(self.peek_byte()?.is_none())
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
