//! # Introduction
//!
//! exprtty tokenizes and parses a small arithmetic expression language
//! (numbers, identifiers, `+ - * /`, parentheses, function calls and simple
//! assignment) into an abstract syntax tree, and ships a terminal playground
//! that shows the token stream and the tree as you type.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST (Program)
//!                    ↓                   ↓
//!               highlighting        JSON records
//! ```
//!
//! 1. [`parser::lexer`]: classifies the source into [`parser::Token`]s with
//!    byte offsets, one token of lookahead via [`parser::Lexer::peek_token`].
//! 2. [`parser`]: recursive descent over the lexer into a [`parser::Program`].
//! 3. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use exprtty::parser::{self, BinaryOperator, Node};
//!
//! let program = parser::parse("1 - 2 - 3").unwrap();
//! assert_eq!(
//!     program.body,
//!     Node::binary(
//!         BinaryOperator::Sub,
//!         Node::number("1"),
//!         Node::binary(BinaryOperator::Sub, Node::number("2"), Node::number("3")),
//!     )
//! );
//! ```

pub mod parser;
pub mod ui;
