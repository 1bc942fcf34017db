//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its error types, the token
//! helpers shared by the grammar rules, and the [`Parser::parse`] entry point.
//!
//! # Parser Architecture
//!
//! The grammar rules live in `expressions` as a second `impl Parser` block.
//! The parser reads tokens straight from an owned [`Lexer`] through
//! `next_token`/`peek_token`: one token of lookahead, no buffering and no
//! backtracking.

use crate::parser::ast::*;
use crate::parser::expressions::MAX_NESTING_DEPTH;
use crate::parser::lexer::{LexError, Lexer, Lookahead, Token};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// Lexeme of the offending token, when there is one
    pub token: Option<String>,
    /// Byte offset of the offending token, when it was consumed
    pub offset: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token: None,
            offset: None,
        }
    }

    pub(crate) fn at_token(message: impl Into<String>, token: &Token) -> Self {
        Self {
            message: message.into(),
            token: Some(token.text.clone()),
            offset: Some(token.start),
        }
    }

    /// Attach a token that may be absent (end of input).
    pub(crate) fn near(message: impl Into<String>, token: Option<&Token>) -> Self {
        match token {
            Some(token) => Self::at_token(message, token),
            None => Self::new(message),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "Parse error at offset {}: {}", offset, self.message),
            None => write!(f, "Parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Any failure of [`Parser::parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    Lex(LexError),
    Parse(ParseError),
}

impl SyntaxError {
    pub fn message(&self) -> &str {
        match self {
            SyntaxError::Lex(err) => &err.message,
            SyntaxError::Parse(err) => &err.message,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Lex(err) => err.fmt(f),
            SyntaxError::Parse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyntaxError::Lex(err) => Some(err),
            SyntaxError::Parse(err) => Some(err),
        }
    }
}

impl From<LexError> for SyntaxError {
    fn from(err: LexError) -> Self {
        SyntaxError::Lex(err)
    }
}

impl From<ParseError> for SyntaxError {
    fn from(err: ParseError) -> Self {
        SyntaxError::Parse(err)
    }
}

/// Recursive descent parser for arithmetic expressions
#[derive(Debug, Default)]
pub struct Parser {
    pub(crate) lexer: Lexer,
    /// Current recursion depth of the nesting rules
    depth: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `source` as a single expression.
    ///
    /// Every token must be consumed; anything left over after a complete
    /// expression is an error.
    pub fn parse(&mut self, source: &str) -> Result<Program, SyntaxError> {
        self.lexer.reset(source);
        self.depth = 0;
        let body = self.parse_expression()?;

        if let Some(token) = self.lexer.next_token()? {
            return Err(ParseError::at_token(format!("Unexpected token {}", token.text), &token).into());
        }

        Ok(Program::new(body))
    }

    // ===== Helper methods =====

    /// Run a recursing grammar rule one level deeper, failing past
    /// [`MAX_NESTING_DEPTH`].
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::new("Expression nested too deeply").into());
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn peek(&mut self) -> Option<Lookahead> {
        self.lexer.peek_token()
    }

    pub(crate) fn advance(&mut self) -> Result<Option<Token>, SyntaxError> {
        Ok(self.lexer.next_token()?)
    }

    /// Whether the next token is the operator `op`.
    pub(crate) fn check_operator(&mut self, op: char) -> bool {
        self.peek().is_some_and(|token| token.is_operator(op))
    }

    /// Consume the next token if it is one of `ops`.
    pub(crate) fn match_operator(&mut self, ops: &[char]) -> Result<Option<Token>, SyntaxError> {
        if ops.iter().any(|&op| self.check_operator(op)) {
            return self.advance();
        }
        Ok(None)
    }

    /// Consume the next token, failing with `message` unless it is `op`.
    pub(crate) fn expect_operator(&mut self, op: char, message: &str) -> Result<Token, SyntaxError> {
        match self.advance()? {
            Some(token) if token.is_operator(op) => Ok(token),
            other => Err(ParseError::near(message, other.as_ref()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_expression() {
        let mut parser = Parser::new();
        let program = parser.parse("1 + 2").unwrap();

        assert_eq!(
            program.body,
            Node::binary(BinaryOperator::Add, Node::number("1"), Node::number("2"))
        );
    }

    #[test]
    fn test_parser_is_reusable() {
        let mut parser = Parser::new();
        assert!(parser.parse("(1").is_err());

        let program = parser.parse("y").unwrap();
        assert_eq!(program.body, Node::assignment(Node::identifier("y"), None));
    }

    #[test]
    fn test_trailing_token() {
        let err = Parser::new().parse("1 + 2 3").unwrap_err();
        match err {
            SyntaxError::Parse(err) => {
                assert_eq!(err.message, "Unexpected token 3");
                assert_eq!(err.token.as_deref(), Some("3"));
                assert_eq!(err.offset, Some(6));
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_lex_error() {
        let err = Parser::new().parse("1 + 2 $").unwrap_err();
        assert!(matches!(err, SyntaxError::Lex(_)));
    }

    #[test]
    fn test_error_display() {
        let err = Parser::new().parse("1 )").unwrap_err();
        assert_eq!(err.to_string(), "Parse error at offset 2: Unexpected token )");

        let err = Parser::new().parse("").unwrap_err();
        assert_eq!(err.to_string(), "Parse error: Unexpected termination of expression");
        assert!(std::error::Error::source(&err).is_some());
    }
}
