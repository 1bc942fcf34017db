// Integration tests for the expression parser

use exprtty::parser::{self, BinaryOperator, Node, Parser, SyntaxError, UnaryOperator};

fn num(literal: &str) -> Node {
    Node::number(literal)
}

fn ident(name: &str) -> Node {
    Node::identifier(name)
}

#[test]
fn test_subtraction_chain_groups_to_the_right() {
    // Same-precedence chains are right-associative: 1 - (2 - 3), not (1 - 2) - 3
    let program = parser::parse("1 - 2 - 3").expect("Parsing failed");

    assert_eq!(
        program.body,
        Node::binary(
            BinaryOperator::Sub,
            num("1"),
            Node::binary(BinaryOperator::Sub, num("2"), num("3"))
        )
    );
}

#[test]
fn test_mixed_additive_chain_groups_to_the_right() {
    let program = parser::parse("1 + 2 - 3 * 4 / 5").unwrap();

    assert_eq!(
        program.body,
        Node::binary(
            BinaryOperator::Add,
            num("1"),
            Node::binary(
                BinaryOperator::Sub,
                num("2"),
                Node::binary(
                    BinaryOperator::Mul,
                    num("3"),
                    Node::binary(BinaryOperator::Div, num("4"), num("5"))
                )
            )
        )
    );
}

#[test]
fn test_bare_identifier_is_assignment_without_value() {
    let program = parser::parse("x").unwrap();
    assert_eq!(program.body, Node::assignment(ident("x"), None));
}

#[test]
fn test_assignment() {
    let program = parser::parse("x = 5").unwrap();
    assert_eq!(program.body, Node::assignment(ident("x"), Some(num("5"))));
}

#[test]
fn test_function_calls() {
    let program = parser::parse("foo(1, 2)").unwrap();
    assert_eq!(program.body, Node::call("foo", vec![num("1"), num("2")]));

    let program = parser::parse("foo()").unwrap();
    assert_eq!(program.body, Node::call("foo", vec![]));
}

#[test]
fn test_full_expression() {
    let program = parser::parse("x = 40 + (6 / 3.0)").unwrap();

    assert_eq!(
        program.body,
        Node::assignment(
            ident("x"),
            Some(Node::binary(
                BinaryOperator::Add,
                num("40"),
                Node::grouping(Node::binary(BinaryOperator::Div, num("6"), num("3.0")))
            ))
        )
    );
}

#[test]
fn test_unary_binds_tighter_than_multiplication() {
    let program = parser::parse("-a * +2").unwrap();

    assert_eq!(
        program.body,
        Node::binary(
            BinaryOperator::Mul,
            Node::unary(UnaryOperator::Minus, ident("a")),
            Node::unary(UnaryOperator::Plus, num("2"))
        )
    );
}

#[test]
fn test_unbalanced_parenthesis() {
    match parser::parse("(1 + 2") {
        Err(SyntaxError::Parse(err)) => {
            assert!(err.message.contains(')'), "message: {}", err.message);
            assert_eq!(err.token, None);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_trailing_garbage() {
    match parser::parse("1 + 2 3") {
        Err(SyntaxError::Parse(err)) => {
            assert_eq!(err.token.as_deref(), Some("3"));
            assert!(err.message.contains('3'));
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_premature_end_of_input() {
    for source in ["", "   ", "1 +", "-", "foo(1,"] {
        match parser::parse(source) {
            Err(SyntaxError::Parse(err)) => {
                assert_eq!(err.message, "Unexpected termination of expression", "source: {:?}", source);
            }
            other => panic!("Expected parse error for {:?}, got {:?}", source, other),
        }
    }
}

#[test]
fn test_lexer_errors_keep_their_kind() {
    assert!(matches!(parser::parse("."), Err(SyntaxError::Lex(_))));
    assert!(matches!(parser::parse("1 + 3.14e"), Err(SyntaxError::Lex(_))));
    assert!(matches!(parser::parse("a @ b"), Err(SyntaxError::Lex(_))));
}

#[test]
fn test_parser_reuse_yields_fresh_trees() {
    let mut parser = Parser::new();
    let first = parser.parse("a = 1").unwrap();
    let second = parser.parse("b").unwrap();
    let again = parser.parse("a = 1").unwrap();

    assert_eq!(first, again);
    assert_eq!(second.body, Node::assignment(ident("b"), None));
}

#[test]
fn test_program_serializes_to_nested_records() {
    let program = parser::parse("f(-x)").unwrap();
    let json: serde_json::Value = serde_json::from_str(&program.to_json_pretty().unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "Program": {
                "body": {
                    "Call": {
                        "name": "f",
                        "arguments": [
                            { "Unary": { "operator": "-", "operand": { "Identifier": "x" } } }
                        ]
                    }
                }
            }
        })
    );
}

#[test]
fn test_long_chain_and_deep_nesting() {
    let source = vec!["1"; 2000].join(" - ");
    let program = parser::parse(&source).expect("Parsing failed");

    let mut node = &program.body;
    let mut operators = 0;
    while let Node::Binary { operator, right, .. } = node {
        assert_eq!(*operator, BinaryOperator::Sub);
        operators += 1;
        node = right;
    }
    assert_eq!(operators, 1999);

    let source = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    match parser::parse(&source) {
        Err(SyntaxError::Parse(err)) => assert_eq!(err.message, "Expression nested too deeply"),
        other => panic!("Expected parse error, got {:?}", other.map(|_| ())),
    }
}
