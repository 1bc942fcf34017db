// AST (Abstract Syntax Tree) definitions for arithmetic expressions

use serde::Serialize;
use std::fmt;

/// Prefix operators accepted by the `Unary` rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl UnaryOperator {
    /// Maps an operator lexeme to a prefix operator.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(UnaryOperator::Plus),
            "-" => Some(UnaryOperator::Minus),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl BinaryOperator {
    /// Maps an operator lexeme to a binary operator.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Sub),
            "*" => Some(BinaryOperator::Mul),
            "/" => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of the expression tree.
///
/// Children are boxed and owned by their parent, so a parsed expression is
/// always a plain tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// Numeric literal, kept as written (`"2.5E-3"`, `".5"`, `"5."`)
    Number(String),

    Identifier(String),

    Unary {
        operator: UnaryOperator,
        operand: Box<Node>,
    },

    Binary {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// `target` is always a [`Node::Identifier`]. A bare identifier that is
    /// not followed by `=` still produces an assignment whose `value` is
    /// `None`; deciding whether it really assigns is left to the consumer.
    Assignment {
        target: Box<Node>,
        value: Option<Box<Node>>,
    },

    Call {
        name: String,
        arguments: Vec<Node>,
    },

    /// Parenthesized sub-expression
    Grouping { inner: Box<Node> },
}

impl Node {
    pub fn number(literal: impl Into<String>) -> Self {
        Node::Number(literal.into())
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(name.into())
    }

    pub fn unary(operator: UnaryOperator, operand: Node) -> Self {
        Node::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: BinaryOperator, left: Node, right: Node) -> Self {
        Node::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assignment(target: Node, value: Option<Node>) -> Self {
        Node::Assignment {
            target: Box::new(target),
            value: value.map(Box::new),
        }
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::Call {
            name: name.into(),
            arguments,
        }
    }

    pub fn grouping(inner: Node) -> Self {
        Node::Grouping {
            inner: Box::new(inner),
        }
    }

    /// Whether this node may appear on the left of `=`.
    pub fn is_identifier(&self) -> bool {
        matches!(self, Node::Identifier(_))
    }
}

/// Root of a parsed expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub body: Node,
}

impl Program {
    pub fn new(body: Node) -> Self {
        Self { body }
    }

    /// Renders the tree as nested, externally tagged JSON records.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ProgramRecord { program: self })
    }
}

#[derive(Serialize)]
struct ProgramRecord<'a> {
    #[serde(rename = "Program")]
    program: &'a Program,
}
