use crate::{
    ast::{BinaryOperator, Node, RelationalOperator},
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

/// An operator accepted at the expression level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpressionOperator {
    /// `+` or `-`
    Arithmetic(BinaryOperator),
    /// A comparison, or the `and`/`or` tokens.
    Relational(RelationalOperator),
}

impl Parser<'_, '_> {
    /// Parses an expression.
    ///
    /// Addition, subtraction and every comparison share one precedence level
    /// and associate to the left, so `1 + 2 < 4 + 1` is `((1 + 2) < 4) + 1`.
    ///
    /// Grammar: `expression := term (op term)*`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.peek_kind().and_then(expression_operator) {
            self.tokens.next();
            self.deepen()?;
            let right = self.parse_term()?;

            left = match op {
                ExpressionOperator::Arithmetic(op) => Node::binary(left, op, right),
                ExpressionOperator::Relational(op) => Node::relational(left, op, right),
            };
        }

        Ok(left)
    }

    /// Parses a term.
    ///
    /// `*`, `/` and `^` share one precedence level and associate to the left:
    /// `2 ^ 2 ^ 3` is `(2 ^ 2) ^ 3`.
    ///
    /// Grammar: `term := factor (("*" | "/" | "^") factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.peek_kind().and_then(term_operator) {
            self.tokens.next();
            self.deepen()?;
            let right = self.parse_factor()?;
            left = Node::binary(left, op, right);
        }

        Ok(left)
    }
}

/// Maps a token kind to the expression-level operator it denotes.
///
/// # Example
/// ```
/// use lineval::{
///     ast::{BinaryOperator, RelationalOperator},
///     interpreter::{
///         parser::binary::{ExpressionOperator, expression_operator},
///         token::TokenKind,
///     },
/// };
///
/// assert_eq!(expression_operator(TokenKind::Minus),
///            Some(ExpressionOperator::Arithmetic(BinaryOperator::Sub)));
/// assert_eq!(expression_operator(TokenKind::LessEq),
///            Some(ExpressionOperator::Relational(RelationalOperator::LessEqual)));
/// assert_eq!(expression_operator(TokenKind::Mult), None);
/// ```
#[must_use]
pub const fn expression_operator(kind: TokenKind) -> Option<ExpressionOperator> {
    use ExpressionOperator::{Arithmetic, Relational};

    match kind {
        TokenKind::Plus => Some(Arithmetic(BinaryOperator::Add)),
        TokenKind::Minus => Some(Arithmetic(BinaryOperator::Sub)),
        TokenKind::LessThan => Some(Relational(RelationalOperator::Less)),
        TokenKind::GreaterThan => Some(Relational(RelationalOperator::Greater)),
        TokenKind::LessEq => Some(Relational(RelationalOperator::LessEqual)),
        TokenKind::GreaterEq => Some(Relational(RelationalOperator::GreaterEqual)),
        TokenKind::EqEq => Some(Relational(RelationalOperator::Equal)),
        TokenKind::And => Some(Relational(RelationalOperator::And)),
        TokenKind::Or => Some(Relational(RelationalOperator::Or)),
        _ => None,
    }
}

/// Maps a token kind to the term-level operator it denotes.
#[must_use]
pub const fn term_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Mult => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        TokenKind::Exponent => Some(BinaryOperator::Pow),
        _ => None,
    }
}
