//! Character cursor shared by the markup and stylesheet parsers.
//!
//! The cursor knows nothing about either grammar. It tracks a byte offset
//! into a borrowed `&str`, always on a `char` boundary, and only ever moves
//! forward.

use crate::error::{ParseError, Result};

/// Forward-only scanning position over a source string.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buffer: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buffer`.
    pub fn new(buffer: &'a str) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The unconsumed tail of the buffer.
    pub fn rest(&self) -> &'a str {
        &self.buffer[self.position..]
    }

    /// `true` iff every byte of the buffer has been consumed.
    pub fn at_end(&self) -> bool {
        self.position >= self.buffer.len()
    }

    /// The character at the current position, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// `true` if the unconsumed input begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume and return the character at the current position.
    ///
    /// # Panics
    ///
    /// Panics at end of input. Call sites check [`at_end`](Self::at_end) or
    /// [`peek`](Self::peek) first; reaching this is a parser bug.
    pub fn advance(&mut self) -> char {
        let Some(c) = self.peek() else {
            panic!("cursor advanced past end of input at byte {}", self.position);
        };
        self.position += c.len_utf8();
        c
    }

    /// Consume characters while `predicate` holds, returning the consumed
    /// slice. May be empty.
    pub fn consume_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let start = self.position;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        &self.buffer[start..self.position]
    }

    /// Skip any run of whitespace.
    pub fn consume_whitespace(&mut self) {
        self.consume_while(char::is_whitespace);
    }

    /// Consume `expected` or fail.
    ///
    /// `context` names what was being parsed and is used for the
    /// end-of-input error.
    pub fn expect(&mut self, expected: char, context: &str) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(ParseError::unexpected(
                format!("{expected:?}"),
                c,
                self.position,
            )),
            None => Err(ParseError::eof(
                format!("{expected:?} in {context}"),
                self.position,
            )),
        }
    }

    /// Error for a required token missing at the current position: the
    /// character found instead, or end of input.
    pub fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(c) => ParseError::unexpected(expected, c, self.position),
            None => ParseError::eof(expected, self.position),
        }
    }
}
