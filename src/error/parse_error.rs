use thiserror::Error;

use crate::error::RuntimeError;

/// Represents all errors that can occur while parsing a token sequence.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    #[error("Unexpected token: {found}. Expected {expected}.")]
    UnexpectedToken {
        /// The token encountered, in its debug form.
        found:    String,
        /// What the grammar wanted instead.
        expected: &'static str,
    },
    /// Ran out of tokens in the middle of a statement.
    #[error("Unexpected end of input. Expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the grammar wanted.
        expected: &'static str,
    },
    /// A `(` was never closed.
    #[error("Expected closing parenthesis ')' but found {found}.")]
    ExpectedClosingParen {
        /// The token found instead, or `EOF`.
        found: String,
    },
    /// A variable was referenced before any `let` bound it.
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// A `let` tried to bind a name that is already bound.
    #[error("Variable redeclaration: {name}")]
    VariableRedeclaration {
        /// The name of the variable.
        name: String,
    },
    /// A statement holds more nested operations than the parser accepts.
    #[error("Expression too deep: more than {limit} nested operations.")]
    TooDeep {
        /// The bound that was exceeded.
        limit: usize,
    },
    /// The initialiser of a declaration failed to evaluate.
    #[error("Failed to evaluate the value of '{name}': {source}")]
    Declaration {
        /// The variable being declared.
        name:   String,
        /// The evaluation failure.
        source: RuntimeError,
    },
}
