//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts a single-line source string into classified [`Token`]s. The lexer is
//! a reusable cursor: [`Lexer::reset`] installs a new source, [`Lexer::next_token`]
//! consumes one token and [`Lexer::peek_token`] looks at the next one without
//! moving the cursor.
//!
//! Offsets are byte offsets into the source. Every lexeme is ASCII, so the text
//! of a token is always `&source[token.start..=token.end]`.

use serde::Serialize;
use std::fmt;

/// Characters accepted as single-character operators
const OPERATORS: &str = "+-*/()^%=;,";

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Operator,
    Identifier,
    Number,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Operator => write!(f, "Operator"),
            TokenKind::Identifier => write!(f, "Identifier"),
            TokenKind::Number => write!(f, "Number"),
        }
    }
}

/// A consumed token with its source provenance. `end` is inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Whether this is the operator token `op`.
    pub fn is_operator(&self, op: char) -> bool {
        self.kind == TokenKind::Operator && self.text.len() == 1 && self.text.starts_with(op)
    }

    /// Drops the offsets, keeping what a lookahead reports.
    pub fn lookahead(&self) -> Lookahead {
        Lookahead {
            kind: self.kind,
            text: self.text.clone(),
        }
    }
}

/// Result of [`Lexer::peek_token`]: kind and lexeme, but no offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookahead {
    pub kind: TokenKind,
    pub text: String,
}

impl Lookahead {
    pub fn is_operator(&self, op: char) -> bool {
        self.kind == TokenKind::Operator && self.text.len() == 1 && self.text.starts_with(op)
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    /// Byte offset where the failing scan started
    pub offset: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexer error at offset {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for LexError {}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, '\t' | ' ' | '\u{00A0}')
}

fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_ascii_digit()
}

/// Lexer for arithmetic expressions
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    source: String,
    position: usize,
    /// Start of the token being scanned
    marker: usize,
}

impl Lexer {
    /// Create a lexer positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        let mut lexer = Self::default();
        lexer.reset(source);
        lexer
    }

    /// Tokenize the entire input
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
        Lexer::new(source).remaining_tokens()
    }

    /// Consume every token left after the cursor.
    pub fn remaining_tokens(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Install a new source string and rewind to its start.
    pub fn reset(&mut self, source: &str) {
        self.source.clear();
        self.source.push_str(source);
        self.position = 0;
        self.marker = 0;
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    /// Consume the next token.
    ///
    /// Returns `Ok(None)` once only whitespace remains.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();
        if self.is_at_end() {
            return Ok(None);
        }

        self.marker = self.position;

        if let Some(token) = self.scan_number()? {
            return Ok(Some(token));
        }
        if let Some(token) = self.scan_operator() {
            return Ok(Some(token));
        }
        if let Some(token) = self.scan_identifier() {
            return Ok(Some(token));
        }

        Err(self.error(format!(
            "Unknown token from character {}",
            self.peek_char().unwrap_or_default()
        )))
    }

    /// Look at the next token without consuming it.
    ///
    /// A scan failure is reported as `None`, the same as end of input.
    pub fn peek_token(&mut self) -> Option<Lookahead> {
        let (position, marker) = (self.position, self.marker);
        let token = self.next_token().ok().flatten();
        self.position = position;
        self.marker = marker;
        token.as_ref().map(Token::lookahead)
    }

    fn scan_operator(&mut self) -> Option<Token> {
        let ch = self.peek_char()?;
        if !OPERATORS.contains(ch) {
            return None;
        }
        self.advance();
        Some(self.make_token(TokenKind::Operator))
    }

    fn scan_identifier(&mut self) -> Option<Token> {
        if !self.peek_char().is_some_and(is_identifier_start) {
            return None;
        }
        self.advance();
        self.skip_while(is_identifier_part);
        Some(self.make_token(TokenKind::Identifier))
    }

    /// Scan `digits [. digits] [(e|E) [+|-] digits]`, where either side of the
    /// dot may be empty but not both.
    fn scan_number(&mut self) -> Result<Option<Token>, LexError> {
        match self.peek_char() {
            Some(ch) if ch.is_ascii_digit() || ch == '.' => {}
            _ => return Ok(None),
        }

        let mut mantissa_digits = self.skip_while(|ch| ch.is_ascii_digit());
        if self.peek_char() == Some('.') {
            self.advance();
            mantissa_digits += self.skip_while(|ch| ch.is_ascii_digit());
        }

        if mantissa_digits == 0 {
            return Err(self.error("Expecting decimal digits after the dot sign".to_string()));
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            self.advance();
            match self.peek_char() {
                Some(ch) if ch == '+' || ch == '-' || ch.is_ascii_digit() => {
                    self.advance();
                    self.skip_while(|ch| ch.is_ascii_digit());
                }
                Some(ch) => {
                    return Err(self.error(format!(
                        "Unexpected character {} after the exponent sign",
                        ch
                    )));
                }
                None => {
                    return Err(self.error("Unexpected <end> after the exponent sign".to_string()));
                }
            }
        }

        Ok(Some(self.make_token(TokenKind::Number)))
    }

    fn skip_whitespace(&mut self) {
        self.skip_while(is_whitespace);
    }

    /// Advance past every character matching `pred`, returning how many.
    fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek_char().is_some_and(&pred) {
            self.advance();
            count += 1;
        }
        count
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            text: self.source[self.marker..self.position].to_string(),
            start: self.marker,
            end: self.position - 1,
        }
    }

    fn error(&self, message: String) -> LexError {
        LexError {
            message,
            offset: self.marker,
        }
    }

    /// Peek at current character without consuming
    fn peek_char(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }
}
