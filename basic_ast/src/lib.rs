use std::fmt::Display;

use keywords::Kw;
use operators::Op;

pub mod diagnostics;
pub mod keywords;
pub mod operators;

/// A (row, column) location in the input, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn start() -> Self {
        Self::new(1, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    // Literals
    Integer(i64),
    Float(f64),
    Str(String),

    // Letter-led lexeme that is not a reserved word, original case kept
    Identifier(String),

    // and, or, xor, not, if
    Keyword(Kw),

    // Comparison and arithmetic operators
    Operator(Op),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Integer(value) => write!(f, "{value}"),
            TokenValue::Float(value) => write!(f, "{value:?}"),
            TokenValue::Str(value) => write!(f, "{value:?}"),
            TokenValue::Identifier(name) => write!(f, "{name}"),
            TokenValue::Keyword(kw) => write!(f, "{kw}"),
            TokenValue::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// A classified lexeme. `end` is the position right after its last character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: TokenValue,
    pub start: Position,
    pub end: Position,
}

impl Token {
    pub fn new(value: TokenValue, start: Position, end: Position) -> Self {
        Self { value, start, end }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}-{}", self.value, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{keywords::Kw, operators::Op, Position, Token, TokenValue};

    #[test]
    fn position_display() {
        assert_eq!(Position::start().to_string(), "1:1");
        assert_eq!(Position::new(3, 12).to_string(), "3:12");
    }

    #[test]
    fn values_display_as_source_text() {
        assert_eq!(TokenValue::Integer(42).to_string(), "42");
        assert_eq!(TokenValue::Float(1.5).to_string(), "1.5");
        assert_eq!(TokenValue::Float(3.0).to_string(), "3.0");
        assert_eq!(TokenValue::Str("a \"b\"".into()).to_string(), "\"a \\\"b\\\"\"");
        assert_eq!(TokenValue::Identifier("Foo".into()).to_string(), "Foo");
        assert_eq!(TokenValue::Keyword(Kw::Xor).to_string(), "xor");
        assert_eq!(TokenValue::Operator(Op::Neq).to_string(), "<>");
    }

    #[test]
    fn token_display() {
        let token = Token::new(
            TokenValue::Operator(Op::Gte),
            Position::new(1, 3),
            Position::new(1, 5),
        );
        assert_eq!(token.to_string(), ">= @ 1:3-1:5");
    }
}
