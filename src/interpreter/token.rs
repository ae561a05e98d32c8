use std::fmt;

/// The kind of a lexical token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeral with no fractional part, such as `42` or `-3`.
    Integer,
    /// A numeral with a fractional part, such as `2.5`.
    Float,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Divide,
    /// `^`
    Exponent,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `<`
    LessThan,
    /// `<=`
    LessEq,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterEq,
    /// `==`
    EqEq,
    /// Logical and. Never produced by the lexer.
    And,
    /// Logical or. Never produced by the lexer.
    Or,
    /// `let`
    Let,
    /// An identifier, either being declared or referenced.
    Variable,
    /// The `=` of a declaration.
    Assign,
    /// `print`
    Print,
    /// End of input. Used by the parser when it runs out of tokens.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the two numeric literal kinds.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// The lexeme of a fixed-spelling kind, or `None` for literals and
    /// identifiers.
    #[must_use]
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Mult => Some("*"),
            Self::Divide => Some("/"),
            Self::Exponent => Some("^"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::LessThan => Some("<"),
            Self::LessEq => Some("<="),
            Self::GreaterThan => Some(">"),
            Self::GreaterEq => Some(">="),
            Self::EqEq => Some("=="),
            Self::And => Some("and"),
            Self::Or => Some("or"),
            Self::Let => Some("let"),
            Self::Assign => Some("="),
            Self::Print => Some("print"),
            Self::Integer | Self::Float | Self::Variable | Self::Eof => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mult => "MULT",
            Self::Divide => "DIVIDE",
            Self::Exponent => "EXPONENT",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LessThan => "LESS_THAN",
            Self::LessEq => "LESS_THAN_EQ",
            Self::GreaterThan => "GREATER_THAN",
            Self::GreaterEq => "GREATER_THAN_EQ",
            Self::EqEq => "EQEQ",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Let => "LET",
            Self::Variable => "VARIABLE",
            Self::Assign => "ASSIGN",
            Self::Print => "PRINT",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// The data a token carries besides its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The value of a numeric literal.
    Number(f64),
    /// The source text of any other token.
    Text(String),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// A lexical token: a kind plus its payload.
///
/// Tokens are immutable. The constructors keep kind and payload consistent:
/// numeric kinds always carry [`Payload::Number`], every other kind carries
/// [`Payload::Text`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind:    TokenKind,
    payload: Payload,
}

impl Token {
    /// Creates a numeric literal token.
    ///
    /// The kind is [`TokenKind::Integer`] when the value has no fractional
    /// part and [`TokenKind::Float`] otherwise. The test is exact.
    ///
    /// # Example
    /// ```
    /// use lineval::interpreter::token::{Token, TokenKind};
    ///
    /// assert_eq!(Token::number(4.0).kind(), TokenKind::Integer);
    /// assert_eq!(Token::number(-0.5).kind(), TokenKind::Float);
    /// ```
    #[must_use]
    pub fn number(value: f64) -> Self {
        let kind = if is_whole_number(value) {
            TokenKind::Integer
        } else {
            TokenKind::Float
        };
        Self { kind,
               payload: Payload::Number(value) }
    }

    /// Creates a token carrying a word, such as a variable name.
    ///
    /// # Panics
    /// Panics in debug builds if `kind` is numeric.
    #[must_use]
    pub fn word(kind: TokenKind, text: impl Into<String>) -> Self {
        debug_assert!(!kind.is_number(), "numeric tokens must be built with Token::number");
        Self { kind,
               payload: Payload::Text(text.into()) }
    }

    /// Creates an operator or punctuation token whose text is its lexeme.
    ///
    /// # Panics
    /// Panics in debug builds if `kind` has no fixed spelling.
    #[must_use]
    pub fn symbol(kind: TokenKind) -> Self {
        debug_assert!(kind.lexeme().is_some(), "{kind} has no fixed spelling");
        Self { kind,
               payload: Payload::Text(kind.lexeme().unwrap_or_default().to_string()) }
    }

    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The payload of this token.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The numeric value, if this is a literal.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self.payload {
            Payload::Number(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    /// The text, if this is not a literal.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) => Some(text),
            Payload::Number(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.kind, self.payload)
    }
}

#[allow(clippy::float_cmp)]
fn is_whole_number(value: f64) -> bool {
    value.floor() == value
}
