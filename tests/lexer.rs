use lineval::{
    error::LexError,
    interpreter::{
        environment::Environment,
        lexer::tokenize,
        token::{Payload, Token, TokenKind},
    },
};

fn lex(line: &str) -> Vec<Token> {
    tokenize(line, &Environment::new()).unwrap_or_else(|e| panic!("'{line}' failed to lex: {e}"))
}

fn kinds(line: &str) -> Vec<TokenKind> {
    lex(line).iter().map(Token::kind).collect()
}

fn lex_error(line: &str) -> LexError {
    tokenize(line, &Environment::new()).expect_err("line was expected to fail")
}

#[test]
fn minus_at_start_is_an_operator() {
    let tokens = lex("-5 + 3");
    assert_eq!(tokens[0].kind(), TokenKind::Minus);
    assert_eq!(tokens[1], Token::number(5.0));
}

#[test]
fn minus_after_operand_folds_into_numeral() {
    assert_eq!(lex("3 -2"), [Token::number(3.0), Token::number(-2.0)]);
    assert_eq!(lex("3-2"), [Token::number(3.0), Token::number(-2.0)]);
    assert_eq!(lex("x-1"),
               [Token::word(TokenKind::Variable, "x"), Token::number(-1.0)]);
    assert_eq!(lex(") -2.5")[1], Token::number(-2.5));
}

#[test]
fn minus_before_space_or_word_is_an_operator() {
    assert_eq!(kinds("3 - 2"),
               [TokenKind::Integer, TokenKind::Minus, TokenKind::Integer]);
    assert_eq!(kinds("3 -x"),
               [TokenKind::Integer, TokenKind::Minus, TokenKind::Variable]);
}

#[test]
fn minus_after_operator_is_an_operator() {
    for line in ["(-2", "1+-2", "1--2", "1*-2", "1/-2"] {
        let tokens = lex(line);
        let minus = &tokens[tokens.len() - 2];
        assert_eq!(minus.kind(), TokenKind::Minus, "in '{line}'");
    }
}

#[test]
fn minus_after_other_tokens_folds() {
    assert_eq!(lex("2 ^ -1")[2], Token::number(-1.0));
    assert_eq!(lex("1 < -1")[2], Token::number(-1.0));
    assert_eq!(lex("print -7")[1], Token::number(-7.0));
}

#[test]
fn numerals_are_classified_by_fraction() {
    assert_eq!(kinds("4 4.0 4.5 007 3."),
               [TokenKind::Integer,
                TokenKind::Integer,
                TokenKind::Float,
                TokenKind::Integer,
                TokenKind::Integer]);
    assert_eq!(lex("4.0")[0].as_number(), Some(4.0));
}

#[test]
fn declaration_header() {
    assert_eq!(kinds("let x = 1"),
               [TokenKind::Let, TokenKind::Variable, TokenKind::Assign, TokenKind::Integer]);
    assert_eq!(lex("let print = 1")[1], Token::word(TokenKind::Variable, "print"));
    assert_eq!(kinds("let y == 2"),
               [TokenKind::Let, TokenKind::Variable, TokenKind::Assign, TokenKind::Integer]);
}

#[test]
fn keywords_need_whole_words() {
    assert_eq!(kinds("letx printy"), [TokenKind::Variable, TokenKind::Variable]);
    assert_eq!(kinds("print x1"), [TokenKind::Print, TokenKind::Variable]);
}

#[test]
fn comparison_operators() {
    assert_eq!(kinds("a==b < c <= d > e >= f"),
               [TokenKind::Variable,
                TokenKind::EqEq,
                TokenKind::Variable,
                TokenKind::LessThan,
                TokenKind::Variable,
                TokenKind::LessEq,
                TokenKind::Variable,
                TokenKind::GreaterThan,
                TokenKind::Variable,
                TokenKind::GreaterEq,
                TokenKind::Variable]);
}

#[test]
fn lone_equals_is_dropped() {
    assert_eq!(lex("1 = 2"), [Token::number(1.0), Token::number(2.0)]);
}

#[test]
fn triple_equals_is_equality_plus_dropped_equals() {
    assert_eq!(kinds("1 === 2"), [TokenKind::Integer, TokenKind::EqEq, TokenKind::Integer]);
}

#[test]
fn operators_and_parentheses() {
    assert_eq!(kinds("(1+2)*3/4^5"),
               [TokenKind::LParen,
                TokenKind::Integer,
                TokenKind::Plus,
                TokenKind::Integer,
                TokenKind::RParen,
                TokenKind::Mult,
                TokenKind::Integer,
                TokenKind::Divide,
                TokenKind::Integer,
                TokenKind::Exponent,
                TokenKind::Integer]);
}

#[test]
fn never_emits_logic_or_eof_tokens() {
    let tokens = lex("1 and 2 or 3");
    assert!(tokens.iter()
                  .all(|t| !matches!(t.kind(), TokenKind::And | TokenKind::Or | TokenKind::Eof)));
    assert!(lex("").is_empty());
}

#[test]
fn debug_lines() {
    let rendered: Vec<String> = lex("let x = -1 print 2.5 + x").iter()
                                                             .map(ToString::to_string)
                                                             .collect();
    assert_eq!(rendered,
               ["LET | let",
                "VARIABLE | x",
                "ASSIGN | =",
                "INTEGER | -1",
                "PRINT | print",
                "FLOAT | 2.5",
                "PLUS | +",
                "VARIABLE | x"]);
}

#[test]
fn payloads_match_kinds() {
    for token in lex("let a = 1.5 print a <= -3") {
        match token.payload() {
            Payload::Number(_) => assert!(token.kind().is_number()),
            Payload::Text(_) => assert!(!token.kind().is_number()),
        }
    }
}

#[test]
fn unknown_characters() {
    assert_eq!(lex_error("2 $ 3"),
               LexError::UnexpectedCharacter { character: '$',
                                               position:  2, });
    assert!(matches!(lex_error("a_b"), LexError::UnexpectedCharacter { character: '_', .. }));
    assert!(matches!(lex_error(".5"), LexError::UnexpectedCharacter { character: '.', .. }));
}

#[test]
fn malformed_numerals() {
    assert_eq!(lex_error("1.2.3"),
               LexError::MalformedNumeral { text:     "1.2.3".to_string(),
                                            position: 0, });
    assert!(matches!(lex_error("x -1..2"), LexError::MalformedNumeral { position: 2, .. }));
}

#[test]
fn incomplete_declarations() {
    assert_eq!(lex_error("let"), LexError::ExpectedVariableName { position: 3 });
    assert_eq!(lex_error("let 5 = 3"), LexError::ExpectedVariableName { position: 4 });
    assert_eq!(lex_error("let x 5"),
               LexError::ExpectedAssign { name:     "x".to_string(),
                                          position: 6, });
    assert!(matches!(lex_error("let x"), LexError::ExpectedAssign { position: 5, .. }));
}

#[test]
fn character_literals_are_reserved() {
    assert_eq!(lex_error("'a'"), LexError::CharacterLiteral { position: 0 });
}
