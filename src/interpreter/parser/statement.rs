use std::io;

use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_, '_> {
    /// Parses a single statement.
    ///
    /// A statement is a declaration when it starts with `let`, a print when it
    /// starts with `print`, and an expression otherwise.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Node> {
        match self.peek_kind() {
            Some(TokenKind::Let) => self.parse_declaration(),
            Some(TokenKind::Print) => self.parse_print(),
            _ => self.parse_expression(),
        }
    }

    /// Parses `let NAME = expression` and binds `NAME` immediately.
    ///
    /// The initialiser is evaluated here, during parsing, and its value is
    /// stored in the environment before the next statement is parsed. The
    /// returned node is [`Node::NoOp`].
    ///
    /// # Errors
    /// - `VariableRedeclaration` if `NAME` is already bound; the existing value
    ///   is kept.
    /// - `Declaration` if the initialiser fails to evaluate.
    /// - Any error from parsing the initialiser.
    fn parse_declaration(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::Let, "'let'")?;
        let name = self.expect(TokenKind::Variable, "a variable name")?
                       .as_text()
                       .unwrap_or_default()
                       .to_string();
        self.expect(TokenKind::Assign, "'='")?;

        let initialiser = self.parse_expression()?;

        if self.environment.contains(&name) {
            return Err(ParseError::VariableRedeclaration { name });
        }

        // Initialisers are expressions, which never contain `print`.
        let value = match initialiser.evaluate(&mut io::sink()) {
            Ok(value) => value,
            Err(source) => return Err(ParseError::Declaration { name, source }),
        };

        self.environment.declare(&name, value)?;
        debug!(%name, value, "declared variable");

        Ok(Node::NoOp)
    }

    /// Parses `print expression`.
    fn parse_print(&mut self) -> ParseResult<Node> {
        self.expect(TokenKind::Print, "'print'")?;
        let expr = self.parse_expression()?;

        Ok(Node::Print(Box::new(expr)))
    }
}
