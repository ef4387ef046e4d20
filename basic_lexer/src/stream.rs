use basic_ast::{diagnostics::LexError, Position};
use tracing::{debug, trace};

use crate::source::ByteSource;

pub const BUFFER_CAPACITY: usize = 1024;

/// Single-character lookahead over a [`ByteSource`], refilled in
/// `BUFFER_CAPACITY` chunks. Each byte decodes to the scalar of the same value.
///
/// Invariant: `pos <= len`. A refill happens only once `pos == len`.
pub struct CharStream<S: ByteSource> {
    source: S,
    buffer: Box<[u8; BUFFER_CAPACITY]>,
    pos: usize,
    len: usize,
    position: Position,
    closed: bool,
}

impl<S: ByteSource> CharStream<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffer: Box::new([0; BUFFER_CAPACITY]),
            pos: 0,
            len: 0,
            position: Position::start(),
            closed: false,
        }
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.len || (!self.closed && self.source.has_bytes_available())
    }

    /// Position of the next unconsumed character.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn peek(&mut self) -> Result<char, LexError> {
        if self.pos >= self.len {
            self.refill()?;
        }

        Ok(char::from(self.buffer[self.pos]))
    }

    /// Like [`peek`](Self::peek), with exhaustion reported as `None`.
    pub fn lookahead(&mut self) -> Result<Option<char>, LexError> {
        if !self.has_more() {
            return Ok(None);
        }

        match self.peek() {
            Ok(c) => Ok(Some(c)),
            Err(LexError::UnexpectedEndOfInput { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Consumes the character last returned by `peek`.
    ///
    /// Callers must peek first; advancing over an empty buffer does nothing.
    pub fn advance(&mut self) {
        debug_assert!(self.pos < self.len, "advance without a successful peek");
        let Some(&byte) = self.buffer[..self.len].get(self.pos) else {
            return;
        };

        if is_newline(char::from(byte)) {
            self.position.row += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }

        self.pos += 1;
    }

    pub fn next_char(&mut self) -> Result<char, LexError> {
        let c = self.peek()?;
        self.advance();
        Ok(c)
    }

    /// Releases the source. Safe to call more than once.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.pos = 0;
        self.len = 0;
        self.source.close();
        debug!(position = %self.position, "input source closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn refill(&mut self) -> Result<(), LexError> {
        let eof = LexError::UnexpectedEndOfInput {
            position: self.position,
        };
        if self.closed || !self.source.has_bytes_available() {
            return Err(eof);
        }

        let read = self.source.read(&mut self.buffer[..])?;
        self.pos = 0;
        self.len = read.min(BUFFER_CAPACITY);
        trace!(bytes = self.len, "refilled character buffer");

        if self.len == 0 {
            return Err(eof);
        }
        Ok(())
    }
}

impl<S: ByteSource> Drop for CharStream<S> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Line terminators: LF, VT, FF, CR and NEL.
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}')
}
