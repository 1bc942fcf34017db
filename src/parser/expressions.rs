//! Expression grammar
//!
//! One method per grammar rule, from loosest to tightest binding:
//!
//! ```text
//! Expression     := Assignment
//! Assignment     := Additive ('=' Assignment)?
//! Additive       := Multiplicative (('+' | '-') Additive)?
//! Multiplicative := Unary (('*' | '/') Multiplicative)?
//! Unary          := ('+' | '-') Unary | Primary
//! Primary        := Identifier | Identifier '(' ArgumentList? ')' | Number | '(' Assignment ')'
//! ArgumentList   := Expression (',' Expression)*
//! ```
//!
//! # Associativity
//!
//! `Additive` and `Multiplicative` chains of the same precedence group to the
//! right: `1 - 2 - 3` is `1 - (2 - 3)`. Consumers evaluating the tree rely on
//! this shape; it must not be rewritten into a left fold. The operands are
//! collected in a loop and folded afterwards, so a long flat chain costs no
//! stack depth while parsing.
//!
//! # Nesting
//!
//! Parentheses, call arguments, chained assignment and prefix operators do
//! recurse. Their depth is capped at [`MAX_NESTING_DEPTH`]; deeper input is a
//! `ParseError` rather than a stack overflow.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser, SyntaxError};

/// Deepest nesting of groupings, call arguments, assignments and prefix
/// operators accepted by the parser
pub const MAX_NESTING_DEPTH: usize = 64;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Node, SyntaxError> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative).
    ///
    /// Any left side that reduces to a bare identifier is wrapped, with or
    /// without a value.
    fn parse_assignment(&mut self) -> Result<Node, SyntaxError> {
        self.nested(|parser| {
            let expr = parser.parse_additive()?;
            if !expr.is_identifier() {
                return Ok(expr);
            }

            let value = if parser.match_operator(&['='])?.is_some() {
                Some(parser.parse_assignment()?)
            } else {
                None
            };

            Ok(Node::assignment(expr, value))
        })
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Node, SyntaxError> {
        let first = self.parse_multiplicative()?;

        let mut rest = Vec::new();
        while let Some(token) = self.match_operator(&['+', '-'])? {
            let operator = binary_operator(&token.text);
            rest.push((operator, self.parse_multiplicative()?));
        }

        Ok(fold_right(first, rest))
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Result<Node, SyntaxError> {
        let first = self.parse_unary()?;

        let mut rest = Vec::new();
        while let Some(token) = self.match_operator(&['*', '/'])? {
            let operator = binary_operator(&token.text);
            rest.push((operator, self.parse_unary()?));
        }

        Ok(fold_right(first, rest))
    }

    /// Parse prefix + and -
    fn parse_unary(&mut self) -> Result<Node, SyntaxError> {
        match self.match_operator(&['+', '-'])? {
            Some(token) => {
                let operator = UnaryOperator::from_symbol(&token.text)
                    .unwrap_or_else(|| unreachable!("matched a non-unary operator {}", token.text));
                let operand = self.nested(Parser::parse_unary)?;
                Ok(Node::unary(operator, operand))
            }
            None => self.parse_primary(),
        }
    }

    /// Parse primary expressions: identifiers, calls, numbers, parentheses
    fn parse_primary(&mut self) -> Result<Node, SyntaxError> {
        let Some(lookahead) = self.peek() else {
            // Either the input is exhausted or the next character does not
            // scan. Consuming surfaces the LexError in the second case.
            self.advance()?;
            return Err(ParseError::new("Unexpected termination of expression").into());
        };

        match lookahead.kind {
            TokenKind::Identifier => {
                self.advance()?;
                if self.check_operator('(') {
                    self.parse_function_call(lookahead.text)
                } else {
                    Ok(Node::Identifier(lookahead.text))
                }
            }
            TokenKind::Number => {
                self.advance()?;
                Ok(Node::Number(lookahead.text))
            }
            TokenKind::Operator if lookahead.is_operator('(') => {
                self.advance()?;
                let inner = self.parse_assignment()?;
                self.expect_operator(')', "Expecting )")?;
                Ok(Node::grouping(inner))
            }
            TokenKind::Operator => {
                let token = self.advance()?;
                Err(ParseError::near(
                    format!("Parse error, can not process token {}", lookahead.text),
                    token.as_ref(),
                )
                .into())
            }
        }
    }

    /// Parse function call: name '(' [arguments] ')'
    fn parse_function_call(&mut self, name: String) -> Result<Node, SyntaxError> {
        self.expect_operator('(', &format!("Expecting ( in a function call \"{}\"", name))?;

        let arguments = if self.check_operator(')') {
            Vec::new()
        } else {
            self.parse_argument_list(&name)?
        };

        self.expect_operator(')', &format!("Expecting ) in a function call \"{}\"", name))?;

        Ok(Node::call(name, arguments))
    }

    /// Parse comma-separated call arguments.
    ///
    /// A comma must be followed by another expression; `f(1,)` is rejected.
    fn parse_argument_list(&mut self, name: &str) -> Result<Vec<Node>, SyntaxError> {
        let mut arguments = vec![self.parse_expression()?];

        while let Some(comma) = self.match_operator(&[','])? {
            if self.check_operator(')') {
                return Err(ParseError::at_token(
                    format!("Expecting an expression after , in a function call \"{}\"", name),
                    &comma,
                )
                .into());
            }
            arguments.push(self.parse_expression()?);
        }

        Ok(arguments)
    }
}

/// Fold `first op1 a op2 b ...` into `first op1 (a op2 (b ...))`.
fn fold_right(first: Node, rest: Vec<(BinaryOperator, Node)>) -> Node {
    let mut pending = rest.into_iter().rev();
    let Some((mut operator, mut right)) = pending.next() else {
        return first;
    };

    for (previous, operand) in pending {
        right = Node::binary(operator, operand, right);
        operator = previous;
    }

    Node::binary(operator, first, right)
}

fn binary_operator(symbol: &str) -> BinaryOperator {
    BinaryOperator::from_symbol(symbol)
        .unwrap_or_else(|| unreachable!("matched a non-binary operator {}", symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Node {
        Parser::new().parse(source).unwrap().body
    }

    fn parse_error(source: &str) -> ParseError {
        match Parser::new().parse(source) {
            Err(SyntaxError::Parse(err)) => err,
            other => panic!("Expected parse error for {:?}, got {:?}", source, other),
        }
    }

    fn num(s: &str) -> Node {
        Node::number(s)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            parse("1 + 2 * 3"),
            Node::binary(
                BinaryOperator::Add,
                num("1"),
                Node::binary(BinaryOperator::Mul, num("2"), num("3"))
            )
        );
    }

    #[test]
    fn test_multiplicative_is_right_associative() {
        assert_eq!(
            parse("8 / 4 / 2"),
            Node::binary(
                BinaryOperator::Div,
                num("8"),
                Node::binary(BinaryOperator::Div, num("4"), num("2"))
            )
        );
    }

    #[test]
    fn test_nested_unary() {
        assert_eq!(
            parse("-+-x"),
            Node::unary(
                UnaryOperator::Minus,
                Node::unary(
                    UnaryOperator::Plus,
                    Node::unary(UnaryOperator::Minus, Node::identifier("x"))
                )
            )
        );
    }

    #[test]
    fn test_grouping_wraps_bare_identifier() {
        assert_eq!(
            parse("(x)"),
            Node::grouping(Node::assignment(Node::identifier("x"), None))
        );
    }

    #[test]
    fn test_chained_assignment() {
        assert_eq!(
            parse("a = b = 1"),
            Node::assignment(
                Node::identifier("a"),
                Some(Node::assignment(Node::identifier("b"), Some(num("1"))))
            )
        );
    }

    #[test]
    fn test_identifier_operand_is_not_wrapped() {
        assert_eq!(
            parse("x + 1"),
            Node::binary(BinaryOperator::Add, Node::identifier("x"), num("1"))
        );
    }

    #[test]
    fn test_nested_call_arguments() {
        assert_eq!(
            parse("max(a, min(1, 2) * 3)"),
            Node::call(
                "max",
                vec![
                    Node::assignment(Node::identifier("a"), None),
                    Node::binary(
                        BinaryOperator::Mul,
                        Node::call("min", vec![num("1"), num("2")]),
                        num("3")
                    ),
                ]
            )
        );
    }

    #[test]
    fn test_assignment_to_non_identifier() {
        let err = parse_error("(x) = 1");
        assert_eq!(err.message, "Unexpected token =");

        let err = parse_error("f() = 1");
        assert_eq!(err.token.as_deref(), Some("="));
    }

    #[test]
    fn test_unprocessable_primary() {
        let err = parse_error("1 + * 2");
        assert_eq!(err.message, "Parse error, can not process token *");
        assert_eq!(err.offset, Some(4));

        // Operators the grammar never uses still lex
        let err = parse_error("^");
        assert_eq!(err.token.as_deref(), Some("^"));
    }

    #[test]
    fn test_call_errors() {
        let err = parse_error("foo(1, 2");
        assert_eq!(err.message, "Expecting ) in a function call \"foo\"");
        assert_eq!(err.token, None);

        let err = parse_error("foo(1 2)");
        assert_eq!(err.message, "Expecting ) in a function call \"foo\"");
        assert_eq!(err.token.as_deref(), Some("2"));
    }

    #[test]
    fn test_trailing_comma_in_call() {
        let err = parse_error("foo(1,)");
        assert_eq!(err.message, "Expecting an expression after , in a function call \"foo\"");
        assert_eq!(err.offset, Some(5));

        let err = parse_error("foo(,)");
        assert_eq!(err.message, "Parse error, can not process token ,");
    }

    #[test]
    fn test_lex_error_in_primary_position() {
        let err = Parser::new().parse("1 + .").unwrap_err();
        assert!(matches!(err, SyntaxError::Lex(_)));

        let err = Parser::new().parse("2 * 3e").unwrap_err();
        assert_eq!(err.message(), "Unexpected <end> after the exponent sign");
    }

    /// Count the operators down the right spine without recursing.
    fn right_spine_len(mut node: &Node) -> usize {
        let mut len = 0;
        while let Node::Binary { right, .. } = node {
            len += 1;
            node = right;
        }
        len
    }

    #[test]
    fn test_long_flat_chain() {
        let source = vec!["1"; 2000].join(" + ");
        assert_eq!(right_spine_len(&parse(&source)), 1999);

        let source = vec!["x"; 2000].join(" * ");
        assert_eq!(right_spine_len(&parse(&source)), 1999);
    }

    #[test]
    fn test_nesting_within_limit() {
        let source = format!("{}1{}", "(".repeat(32), ")".repeat(32));
        let mut node = &parse(&source);
        let mut depth = 0;
        while let Node::Grouping { inner } = node {
            depth += 1;
            node = inner;
        }
        assert_eq!(depth, 32);
        assert_eq!(node, &num("1"));
    }

    #[test]
    fn test_deep_grouping_is_rejected() {
        let source = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
        assert_eq!(parse_error(&source).message, "Expression nested too deeply");
    }

    #[test]
    fn test_deep_unary_is_rejected() {
        let source = format!("{}1", "-".repeat(1000));
        assert_eq!(parse_error(&source).message, "Expression nested too deeply");
    }

    #[test]
    fn test_deep_call_arguments_are_rejected() {
        let source = format!("{}1{}", "f(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
        assert_eq!(parse_error(&source).message, "Expression nested too deeply");
    }
}
