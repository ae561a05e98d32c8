use std::iter::Peekable;

use logos::{Logos, SpannedIter};
use tracing::{debug, trace};

use crate::{
    error::LexError,
    interpreter::{
        environment::Environment,
        token::{Token, TokenKind},
    },
};

pub type LexResult<T> = Result<T, LexError>;

/// Raw lexical units recognised by the scanner.
///
/// These are cooked into [`Token`]s by [`tokenize`], which applies the rules
/// that depend on context: keywords, the `let NAME =` header, and whether a
/// `-` is an operator or the sign of a numeral.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f\x0B]+")]
enum Lexeme {
    /// Digits with any number of decimal points; more than one is rejected
    /// when the numeral is cooked.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_string())]
    Numeral(String),
    /// Alphanumeric words: keywords and identifiers.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `'`
    #[token("'")]
    Quote,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
}

type Lexemes<'src> = Peekable<SpannedIter<'src, Lexeme>>;

/// Converts one line of source text into tokens.
///
/// The whole line is consumed. Whitespace separates tokens and is otherwise
/// ignored.
///
/// A `-` is emitted as [`TokenKind::Minus`] when no token precedes it, when
/// the next character is not a digit, or when the previous token is `(`, `+`,
/// `-`, `*` or `/`. Otherwise it is folded into the numeral that follows it,
/// so `3 - 4` has a binary minus while `x -4` yields the literal `-4`.
///
/// A lone `=` outside a `let` header is dropped.
///
/// The environment is accepted so that lexing may one day depend on declared
/// names; it is not consulted.
///
/// # Errors
/// Returns a [`LexError`] for an unrecognised character, a numeral with more
/// than one decimal point, a `let` without a name or `=`, and for `'`.
///
/// # Example
/// ```
/// use lineval::interpreter::{
///     environment::Environment,
///     lexer::tokenize,
///     token::TokenKind,
/// };
///
/// let tokens = tokenize("let x = 2.5", &Environment::new()).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let, TokenKind::Variable, TokenKind::Assign, TokenKind::Float]);
/// ```
pub fn tokenize(line: &str, _environment: &Environment) -> LexResult<Vec<Token>> {
    let mut lexemes = Lexeme::lexer(line).spanned().peekable();
    let mut tokens = Vec::new();

    while let Some((lexeme, span)) = lexemes.next() {
        let Ok(lexeme) = lexeme else {
            return Err(unrecognised(line, span.start));
        };

        match lexeme {
            Lexeme::Word(word) => match word.as_str() {
                "let" => {
                    tokens.push(Token::symbol(TokenKind::Let));
                    lex_declaration_header(&mut lexemes, &mut tokens, line.len())?;
                },
                "print" => tokens.push(Token::symbol(TokenKind::Print)),
                _ => tokens.push(Token::word(TokenKind::Variable, word)),
            },
            Lexeme::Numeral(text) => tokens.push(numeral(&text, span.start, false)?),
            Lexeme::Minus => {
                let folds_sign = tokens.last()
                                       .is_some_and(|last| !forces_binary_minus(last.kind()));
                let signed = lexemes.next_if(|(next, next_span)| {
                                        folds_sign
                                        && next_span.start == span.end
                                        && matches!(next, Ok(Lexeme::Numeral(_)))
                                    });

                match signed {
                    Some((Ok(Lexeme::Numeral(text)), _)) => {
                        tokens.push(numeral(&text, span.start, true)?);
                    },
                    _ => tokens.push(Token::symbol(TokenKind::Minus)),
                }
            },
            // Only meaningful inside a `let` header, which consumes its own `=`.
            Lexeme::Equals => {},
            Lexeme::Quote => return Err(LexError::CharacterLiteral { position: span.start }),
            other => {
                if let Some(kind) = lexeme_to_token_kind(&other) {
                    tokens.push(Token::symbol(kind));
                }
            },
        }
    }

    for token in &tokens {
        trace!(%token, "lexed token");
    }
    debug!(count = tokens.len(), "tokenized line");

    Ok(tokens)
}

/// Lexes the `NAME =` that must follow `let`.
///
/// Any word is accepted as the name, keywords included. Both `=` and `==`
/// close the header: in the latter case the second `=` stands alone and is
/// dropped like any other lone `=`.
fn lex_declaration_header(lexemes: &mut Lexemes<'_>,
                          tokens: &mut Vec<Token>,
                          end_of_line: usize)
                          -> LexResult<()> {
    let name = match lexemes.next() {
        Some((Ok(Lexeme::Word(name)), _)) => name,
        Some((_, span)) => return Err(LexError::ExpectedVariableName { position: span.start }),
        None => return Err(LexError::ExpectedVariableName { position: end_of_line }),
    };
    tokens.push(Token::word(TokenKind::Variable, name.clone()));

    match lexemes.next() {
        Some((Ok(Lexeme::Equals | Lexeme::EqualEqual), _)) => {
            tokens.push(Token::symbol(TokenKind::Assign));
            Ok(())
        },
        Some((_, span)) => Err(LexError::ExpectedAssign { name,
                                                          position: span.start }),
        None => Err(LexError::ExpectedAssign { name,
                                               position: end_of_line }),
    }
}

/// Cooks a numeral into an `Integer` or `Float` token.
///
/// # Parameters
/// - `text`: The digits as written, without any sign.
/// - `position`: Where the numeral (or its sign) starts, for error reporting.
/// - `negative`: Whether a folded `-` preceded the digits.
fn numeral(text: &str, position: usize, negative: bool) -> LexResult<Token> {
    let malformed = || LexError::MalformedNumeral { text: text.to_string(),
                                                    position };

    if text.matches('.').count() > 1 {
        return Err(malformed());
    }
    let value: f64 = text.parse().map_err(|_| malformed())?;

    Ok(Token::number(if negative { -value } else { value }))
}

/// Token kinds after which a `-` is always the subtraction operator.
const fn forces_binary_minus(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::LParen
             | TokenKind::Plus
             | TokenKind::Minus
             | TokenKind::Mult
             | TokenKind::Divide)
}

/// Maps the fixed-spelling lexemes to their token kinds.
fn lexeme_to_token_kind(lexeme: &Lexeme) -> Option<TokenKind> {
    match lexeme {
        Lexeme::Plus => Some(TokenKind::Plus),
        Lexeme::Minus => Some(TokenKind::Minus),
        Lexeme::Star => Some(TokenKind::Mult),
        Lexeme::Slash => Some(TokenKind::Divide),
        Lexeme::Caret => Some(TokenKind::Exponent),
        Lexeme::LParen => Some(TokenKind::LParen),
        Lexeme::RParen => Some(TokenKind::RParen),
        Lexeme::EqualEqual => Some(TokenKind::EqEq),
        Lexeme::LessEqual => Some(TokenKind::LessEq),
        Lexeme::Less => Some(TokenKind::LessThan),
        Lexeme::GreaterEqual => Some(TokenKind::GreaterEq),
        Lexeme::Greater => Some(TokenKind::GreaterThan),
        Lexeme::Numeral(_) | Lexeme::Word(_) | Lexeme::Quote | Lexeme::Equals => None,
    }
}

fn unrecognised(line: &str, position: usize) -> LexError {
    let character = line.get(position..)
                        .and_then(|rest| rest.chars().next())
                        .unwrap_or(char::REPLACEMENT_CHARACTER);

    LexError::UnexpectedCharacter { character,
                                    position }
}
