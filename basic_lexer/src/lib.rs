pub mod source;
pub mod stream;

use basic_ast::{
    diagnostics::LexError, keywords::check_keyword, operators::check_operator, Position, Token,
    TokenValue,
};
use tracing::{debug, trace};

pub use source::{ByteSource, ReaderSource};
pub use stream::CharStream;

/// Tokenizes a whole string, stopping quietly at end of input.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(input.as_bytes()).tokens().collect()
}

pub struct Tokenizer<S: ByteSource> {
    stream: CharStream<S>,
}

impl<S: ByteSource> Tokenizer<S> {
    pub fn new(source: S) -> Self {
        Self {
            stream: CharStream::new(source),
        }
    }

    pub fn has_more_tokens(&self) -> bool {
        self.stream.has_more()
    }

    pub fn position(&self) -> Position {
        self.stream.position()
    }

    pub fn close(&mut self) {
        self.stream.close();
    }

    /// Scans the next lexeme. Running out of input, even if only whitespace
    /// was left, is reported as `UnexpectedEndOfInput`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let token = self.scan_token();
        match &token {
            Ok(token) => trace!(%token, "token"),
            Err(err) if err.is_end_of_input() => trace!(position = %self.position(), "end of input"),
            Err(err) => debug!(%err, "lexical error"),
        }
        token
    }

    /// Yields tokens until input runs out, or up to and including the first
    /// lexical error.
    pub fn tokens(&mut self) -> impl Iterator<Item = Result<Token, LexError>> + '_ {
        let mut failed = false;
        std::iter::from_fn(move || {
            if failed || !self.has_more_tokens() {
                return None;
            }

            match self.next_token() {
                Ok(token) => Some(Ok(token)),
                Err(err) if err.is_end_of_input() => None,
                Err(err) => {
                    failed = true;
                    Some(Err(err))
                }
            }
        })
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        let first_char = self.skip_whitespace()?;
        let start = self.stream.position();

        let value = match first_char {
            c if c.is_ascii_digit() => self.number(start)?,
            c if c.is_ascii_alphabetic() => self.word()?,
            _ => self.symbol(start)?,
        };

        Ok(Token::new(value, start, self.stream.position()))
    }

    fn skip_whitespace(&mut self) -> Result<char, LexError> {
        loop {
            if !self.stream.has_more() {
                return Err(LexError::UnexpectedEndOfInput {
                    position: self.stream.position(),
                });
            }

            let c = self.stream.peek()?;
            if !c.is_whitespace() {
                return Ok(c);
            }
            self.stream.advance();
        }
    }

    fn number(&mut self, start: Position) -> Result<TokenValue, LexError> {
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(c) = self.stream.lookahead()? {
            match c {
                '0'..='9' => {}
                '.' if !seen_dot => seen_dot = true,
                c if c.is_whitespace() => break,
                c => return Err(self.unexpected(c)),
            }
            text.push(c);
            self.stream.advance();
        }

        let value = if seen_dot {
            text.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(TokenValue::Float)
        } else {
            text.parse::<i64>().ok().map(TokenValue::Integer)
        };

        value.ok_or(LexError::MalformedNumber { text, start })
    }

    fn word(&mut self) -> Result<TokenValue, LexError> {
        let mut text = String::new();

        while let Some(c) = self.stream.lookahead()? {
            if c.is_whitespace() {
                break;
            }
            if !c.is_ascii_alphanumeric() {
                return Err(self.unexpected(c));
            }
            text.push(c);
            self.stream.advance();
        }

        Ok(match check_keyword(&text) {
            Some(kw) => TokenValue::Keyword(kw),
            None => TokenValue::Identifier(text),
        })
    }

    fn symbol(&mut self, start: Position) -> Result<TokenValue, LexError> {
        if self.stream.peek()? == '"' {
            return self.double_quoted_string(start);
        }

        let mut text = String::new();
        while let Some(c) = self.stream.lookahead()? {
            if c.is_whitespace() {
                break;
            }
            text.push(c);
            self.stream.advance();
        }

        match check_operator(&text) {
            Some(op) => Ok(TokenValue::Operator(op)),
            None => Err(LexError::UnknownToken { text, start }),
        }
    }

    /// Contents are kept verbatim, whitespace included. Escapes: `\"` `\\`
    /// `\n` `\t` `\r`.
    fn double_quoted_string(&mut self, start: Position) -> Result<TokenValue, LexError> {
        // opening quote
        self.stream.advance();

        let mut value = String::new();
        loop {
            let Some(c) = self.stream.lookahead()? else {
                return Err(LexError::UnterminatedString { start });
            };
            self.stream.advance();

            match c {
                '"' => return Ok(TokenValue::Str(value)),
                '\\' => {
                    let Some(escaped) = self.stream.lookahead()? else {
                        return Err(LexError::UnterminatedString { start });
                    };
                    let decoded = match escaped {
                        '"' => '"',
                        '\\' => '\\',
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        other => return Err(self.unexpected(other)),
                    };
                    self.stream.advance();
                    value.push(decoded);
                }
                c => value.push(c),
            }
        }
    }

    fn unexpected(&self, ch: char) -> LexError {
        LexError::UnexpectedCharacter {
            ch,
            position: self.stream.position(),
        }
    }
}
