use std::io;

use thiserror::Error;

use super::Position;

/// Failure of a single `next_token` call. No partial token survives an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected end of input at {position}")]
    UnexpectedEndOfInput { position: Position },

    #[error("unexpected character {ch:?} at {position}")]
    UnexpectedCharacter { ch: char, position: Position },

    #[error("unknown token `{text}` at {start}")]
    UnknownToken { text: String, start: Position },

    #[error("malformed number `{text}` at {start}")]
    MalformedNumber { text: String, start: Position },

    #[error("unterminated string starting at {start}")]
    UnterminatedString { start: Position },

    #[error("failed to read input: {message}")]
    ReadFailed { kind: io::ErrorKind, message: String },
}

impl LexError {
    /// Where the error was detected, if it is tied to the source text.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::UnexpectedEndOfInput { position }
            | LexError::UnexpectedCharacter { position, .. } => Some(*position),
            LexError::UnknownToken { start, .. }
            | LexError::MalformedNumber { start, .. }
            | LexError::UnterminatedString { start } => Some(*start),
            LexError::ReadFailed { .. } => None,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, LexError::UnexpectedEndOfInput { .. })
    }
}

impl From<io::Error> for LexError {
    fn from(err: io::Error) -> Self {
        LexError::ReadFailed {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::LexError;
    use crate::Position;

    #[test]
    fn messages_carry_position() {
        let err = LexError::UnknownToken {
            text: "@@".to_owned(),
            start: Position::new(1, 4),
        };
        assert_eq!(err.to_string(), "unknown token `@@` at 1:4");
        assert_eq!(err.position(), Some(Position::new(1, 4)));
    }

    #[test]
    fn io_errors_convert() {
        let err: LexError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(
            err,
            LexError::ReadFailed {
                kind: io::ErrorKind::BrokenPipe,
                message: "pipe closed".to_owned(),
            }
        );
        assert_eq!(err.position(), None);
        assert!(!err.is_end_of_input());
    }
}
