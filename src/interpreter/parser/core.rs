use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        environment::Environment,
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Most operators, parentheses and prefix minuses a single statement may hold.
///
/// The tree of a statement is never taller than this, which keeps the
/// recursive parse, evaluation and drop of a statement within the stack.
pub const MAX_DEPTH: usize = 256;

/// A recursive-descent parser over the tokens of one line.
///
/// The parser borrows the session's environment mutably: declarations are
/// bound as soon as they are parsed, so a later statement in the same token
/// sequence can already refer to them. Variable references are resolved to
/// their current values while parsing.
///
/// Grammar:
/// ```text
/// statement   := declaration | print | expression
/// declaration := "let" VARIABLE "=" expression
/// print       := "print" expression
/// expression  := term (("+" | "-" | "<" | ">" | "<=" | ">=" | "==" | "and" | "or") term)*
/// term        := factor (("*" | "/" | "^") factor)*
/// factor      := NUMBER | VARIABLE | "(" expression ")" | "-" factor
/// ```
/// The last `factor` alternative is only accepted when unary minus is enabled.
///
/// A statement with more than [`MAX_DEPTH`] operators, parentheses and prefix
/// minuses is rejected with [`ParseError::TooDeep`].
pub struct Parser<'src, 'env> {
    pub(in crate::interpreter::parser) tokens:      Peekable<Iter<'src, Token>>,
    pub(in crate::interpreter::parser) environment: &'env mut Environment,
    pub(in crate::interpreter::parser) unary_minus: bool,
    depth:                                          usize,
}

impl<'src, 'env> Parser<'src, 'env> {
    /// Creates a parser over `tokens` that binds declarations in
    /// `environment`. Unary minus is enabled.
    #[must_use]
    pub fn new(tokens: &'src [Token], environment: &'env mut Environment) -> Self {
        Self { tokens: tokens.iter().peekable(),
               environment,
               unary_minus: true,
               depth: 0 }
    }

    /// Enables or disables parsing `-` at the start of a factor as negation.
    ///
    /// When disabled, such a `-` is an unexpected token and only the lexer's
    /// sign folding produces negative numbers.
    #[must_use]
    pub fn unary_minus(mut self, enabled: bool) -> Self {
        self.unary_minus = enabled;
        self
    }

    /// Parses every statement in the token sequence and returns the node of
    /// the last one.
    ///
    /// Earlier statements are parsed in full, and their declarations are bound,
    /// but their nodes are dropped. An empty sequence yields [`Node::NoOp`].
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered. Declarations completed
    /// before the error stay bound.
    ///
    /// # Example
    /// ```
    /// use lineval::{
    ///     ast::Node,
    ///     interpreter::{
    ///         environment::Environment, lexer::tokenize, parser::core::Parser,
    ///     },
    /// };
    ///
    /// let mut env = Environment::new();
    /// let tokens = tokenize("let x = 5 x + 1", &env).unwrap();
    /// let node = Parser::new(&tokens, &mut env).parse().unwrap();
    ///
    /// assert_eq!(env.get("x"), Some(5.0));
    /// assert!(matches!(node, Node::BinaryOp { .. }));
    /// ```
    pub fn parse(mut self) -> ParseResult<Node> {
        let mut result = Node::NoOp;

        while self.tokens.peek().is_some() {
            self.depth = 0;
            result = self.parse_statement()?;
        }

        Ok(result)
    }

    /// The kind of the next token, without consuming it.
    pub(in crate::interpreter::parser) fn peek_kind(&mut self) -> Option<TokenKind> {
        self.tokens.peek().map(|token| token.kind())
    }

    /// Counts one more level of nesting in the current statement.
    ///
    /// # Errors
    /// `TooDeep` once the statement exceeds [`MAX_DEPTH`].
    pub(in crate::interpreter::parser) fn deepen(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }

    /// Consumes the next token, which must be of `kind`.
    ///
    /// # Errors
    /// `UnexpectedToken` if the next token has another kind,
    /// `UnexpectedEndOfInput` if there is none.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind,
                                                 expected: &'static str)
                                                 -> ParseResult<&'src Token> {
        match self.tokens.next() {
            Some(token) if token.kind() == kind => Ok(token),
            Some(token) => Err(ParseError::UnexpectedToken { found: token.to_string(),
                                                             expected }),
            None => Err(ParseError::UnexpectedEndOfInput { expected }),
        }
    }
}

/// Parses a token sequence against `environment` with the default options.
///
/// Shorthand for `Parser::new(tokens, environment).parse()`.
///
/// # Errors
/// See [`Parser::parse`].
pub fn parse(tokens: &[Token], environment: &mut Environment) -> ParseResult<Node> {
    Parser::new(tokens, environment).parse()
}
