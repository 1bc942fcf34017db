//! Arithmetic expression parser
//!
//! This module transforms expression source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser state, error types and the entry point (tokens → AST)
//! - `expressions`: The grammar rules
//! - [`ast`]: AST node definitions
//!
//! # Supported Language
//!
//! - Numbers: `42`, `3.14`, `.5`, `5.`, `2e10`, `2.5E-3`
//! - Identifiers: ASCII letters, digits and `_`, not starting with a digit
//! - Operators: unary `+`/`-`, binary `+ - * /`, parentheses
//! - Function calls: `max(a, 1)`
//! - Assignment: `x = 5`
//!
//! `^`, `%` and `;` are recognized by the lexer but rejected by the grammar.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;

pub use ast::{BinaryOperator, Node, Program, UnaryOperator};
pub use lexer::{LexError, Lexer, Lookahead, Token, TokenKind};
pub use parse::{ParseError, Parser, SyntaxError};

/// Parse `source` with a fresh [`Parser`].
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    Parser::new().parse(source)
}
