use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

const FACTOR: &str = "a number, a variable or '('";

impl Parser<'_, '_> {
    /// Parses a factor.
    ///
    /// - Numbers become [`Node::NumberLiteral`].
    /// - Variables are looked up now and also become [`Node::NumberLiteral`]:
    ///   the node holds the value at parse time, not a reference.
    /// - `( expression )` yields the inner expression.
    /// - `- factor` yields a negation, when unary minus is enabled.
    ///
    /// Grammar: `factor := NUMBER | VARIABLE | "(" expression ")" | "-" factor`
    ///
    /// # Errors
    /// - `UndefinedVariable` for a name that was never declared.
    /// - `ExpectedClosingParen` for an unbalanced `(`.
    /// - `UnexpectedToken` / `UnexpectedEndOfInput` when no factor starts here.
    /// - `TooDeep` when the statement nests too far.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Node> {
        let Some(token) = self.tokens.next() else {
            return Err(ParseError::UnexpectedEndOfInput { expected: FACTOR });
        };

        if let Some(value) = token.as_number() {
            return Ok(Node::NumberLiteral(value));
        }

        match token.kind() {
            TokenKind::Variable => {
                let name = token.as_text().unwrap_or_default();
                self.environment
                    .get(name)
                    .map(Node::NumberLiteral)
                    .ok_or_else(|| ParseError::UndefinedVariable { name: name.to_string() })
            },
            TokenKind::LParen => {
                self.deepen()?;
                let inner = self.parse_expression()?;
                match self.tokens.next() {
                    Some(token) if token.kind() == TokenKind::RParen => Ok(inner),
                    Some(token) => Err(ParseError::ExpectedClosingParen { found: token.to_string() }),
                    None => Err(ParseError::ExpectedClosingParen { found: TokenKind::Eof.to_string() }),
                }
            },
            TokenKind::Minus if self.unary_minus => {
                self.deepen()?;
                let operand = self.parse_factor()?;
                Ok(Node::unary(UnaryOperator::Negate, operand))
            },
            _ => Err(ParseError::UnexpectedToken { found:    token.to_string(),
                                                   expected: FACTOR, }),
        }
    }
}
