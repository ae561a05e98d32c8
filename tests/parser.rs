use std::io;

use lineval::{
    ast::{BinaryOperator, Node, RelationalOperator, UnaryOperator},
    error::{ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        lexer::tokenize,
        parser::core::{MAX_DEPTH, Parser, parse},
        token::{Token, TokenKind},
    },
};

fn num(value: f64) -> Node {
    Node::NumberLiteral(value)
}

fn parse_line(line: &str, env: &mut Environment) -> Result<Node, ParseError> {
    let tokens = tokenize(line, env).unwrap();
    parse(&tokens, env)
}

fn tree(line: &str) -> Node {
    parse_line(line, &mut Environment::new()).unwrap_or_else(|e| panic!("'{line}' failed: {e}"))
}

#[test]
fn term_level_binds_tighter() {
    assert_eq!(tree("1 + 2 * 3"),
               Node::binary(num(1.0),
                            BinaryOperator::Add,
                            Node::binary(num(2.0), BinaryOperator::Mul, num(3.0))));
}

#[test]
fn term_level_is_flat() {
    assert_eq!(tree("2 ^ 3 * 4"),
               Node::binary(Node::binary(num(2.0), BinaryOperator::Pow, num(3.0)),
                            BinaryOperator::Mul,
                            num(4.0)));
}

#[test]
fn expression_level_is_flat() {
    assert_eq!(tree("1 < 2 + 3"),
               Node::binary(Node::relational(num(1.0), RelationalOperator::Less, num(2.0)),
                            BinaryOperator::Add,
                            num(3.0)));
}

#[test]
fn parentheses_group() {
    assert_eq!(tree("(1 + 2) * 3"),
               Node::binary(Node::binary(num(1.0), BinaryOperator::Add, num(2.0)),
                            BinaryOperator::Mul,
                            num(3.0)));
}

#[test]
fn print_wraps_expression() {
    assert_eq!(tree("print 1 == 1"),
               Node::Print(Box::new(Node::relational(num(1.0),
                                                     RelationalOperator::Equal,
                                                     num(1.0)))));
}

#[test]
fn prefix_minus_builds_negation() {
    assert_eq!(tree("-(4)"), Node::unary(UnaryOperator::Negate, num(4.0)));
}

#[test]
fn prefix_minus_can_be_disabled() {
    let mut env = Environment::new();
    let tokens = tokenize("-4", &env).unwrap();
    let err = Parser::new(&tokens, &mut env).unary_minus(false).parse().unwrap_err();

    assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == "MINUS | -"));
}

#[test]
fn declaration_binds_during_parse() {
    let mut env = Environment::new();

    assert_eq!(parse_line("let y = 2 * 3", &mut env).unwrap(), Node::NoOp);
    assert_eq!(env.get("y"), Some(6.0));
}

#[test]
fn variables_are_captured_by_value() {
    let mut env = Environment::new();
    env.declare("x", 5.0).unwrap();

    assert_eq!(parse_line("x", &mut env).unwrap(), num(5.0));
}

#[test]
fn later_statement_sees_earlier_declaration() {
    let mut env = Environment::new();

    assert_eq!(parse_line("let a = 3 a * a", &mut env).unwrap(),
               Node::binary(num(3.0), BinaryOperator::Mul, num(3.0)));
}

#[test]
fn empty_input_is_noop() {
    assert_eq!(parse(&[], &mut Environment::new()).unwrap(), Node::NoOp);
}

#[test]
fn undefined_variable() {
    let err = parse_line("1 + nope", &mut Environment::new()).unwrap_err();
    assert!(matches!(err, ParseError::UndefinedVariable { ref name } if name == "nope"));
}

#[test]
fn redeclaration() {
    let mut env = Environment::new();
    parse_line("let k = 1", &mut env).unwrap();

    let err = parse_line("let k = 2", &mut env).unwrap_err();
    assert!(matches!(err, ParseError::VariableRedeclaration { ref name } if name == "k"));
    assert_eq!(env.get("k"), Some(1.0));
}

#[test]
fn unbalanced_parentheses() {
    let mut env = Environment::new();

    assert!(matches!(parse_line("(1 + 2", &mut env),
                     Err(ParseError::ExpectedClosingParen { ref found }) if found == "EOF"));
    assert!(matches!(parse_line("(1 2)", &mut env),
                     Err(ParseError::ExpectedClosingParen { ref found }) if found == "INTEGER | 2"));
    assert!(matches!(parse_line("(1))", &mut env), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn missing_operands() {
    let mut env = Environment::new();

    assert!(matches!(parse_line("1 +", &mut env), Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse_line("print", &mut env),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse_line("let q =", &mut env),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse_line("* 2", &mut env), Err(ParseError::UnexpectedToken { .. })));
    assert!(!env.contains("q"));
}

#[test]
fn malformed_declaration_tokens() {
    let tokens = [Token::symbol(TokenKind::Let), Token::number(1.0)];
    let err = parse(&tokens, &mut Environment::new()).unwrap_err();

    assert!(matches!(err, ParseError::UnexpectedToken { expected: "a variable name", .. }));
}

#[test]
fn logic_tokens_parse_but_do_not_evaluate() {
    let tokens = [Token::number(1.0), Token::symbol(TokenKind::And), Token::number(0.0)];
    let node = parse(&tokens, &mut Environment::new()).unwrap();

    assert_eq!(node, Node::relational(num(1.0), RelationalOperator::And, num(0.0)));
    assert!(matches!(node.evaluate(&mut io::sink()),
                     Err(RuntimeError::UnsupportedOperator { ref op }) if op == "and"));
}

#[test]
fn failing_initialiser_leaves_name_unbound() {
    let tokens = [Token::symbol(TokenKind::Let),
                  Token::word(TokenKind::Variable, "z"),
                  Token::symbol(TokenKind::Assign),
                  Token::number(1.0),
                  Token::symbol(TokenKind::Or),
                  Token::number(1.0)];
    let mut env = Environment::new();
    let err = parse(&tokens, &mut env).unwrap_err();

    assert!(matches!(err, ParseError::Declaration { ref name, .. } if name == "z"));
    assert!(env.is_empty());
}

#[test]
fn evaluation_of_hand_built_nodes() {
    let mut out = Vec::new();

    assert_eq!(Node::NoOp.evaluate(&mut out).unwrap(), 0.0);
    assert_eq!(Node::unary(UnaryOperator::Negate, num(3.0)).evaluate(&mut out).unwrap(), -3.0);
    assert_eq!(Node::Print(Box::new(num(-0.5))).evaluate(&mut out).unwrap(), -0.5);
    assert_eq!(out, b"-0.5\n");
}

#[test]
fn prefix_minus_chain_is_bounded() {
    let mut env = Environment::new();
    let within = format!("{}1", "-".repeat(MAX_DEPTH));
    let beyond = format!("{}1", "-".repeat(MAX_DEPTH + 1));

    assert!(parse_line(&within, &mut env).is_ok());
    assert!(matches!(parse_line(&beyond, &mut env),
                     Err(ParseError::TooDeep { limit }) if limit == MAX_DEPTH));
}

#[test]
fn depth_is_counted_per_statement() {
    let mut env = Environment::new();
    let chain = vec!["1"; MAX_DEPTH + 1].join(" * ");
    let line = format!("let a = {chain} let b = {chain} a + b");

    assert_eq!(parse_line(&line, &mut env).unwrap(),
               Node::binary(num(1.0), BinaryOperator::Add, num(1.0)));
    assert_eq!(env.len(), 2);
}
