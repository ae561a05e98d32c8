use thiserror::Error;

/// Lexing errors.
///
/// Raised while turning one line of source text into tokens: unrecognised
/// characters, malformed numerals, and an incomplete `let NAME =` header.
pub mod lex_error;
/// Parsing errors.
///
/// Raised while building the AST: unexpected tokens, unbalanced parentheses,
/// undefined variables, and redeclared variables.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while evaluating an AST. The parser only builds supported
/// operators, so these mostly signal a hand-built tree or a failing output
/// stream.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure while interpreting a single line.
///
/// None of these is fatal to a session; the line-processing boundary reports
/// the error and moves on to the next line.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed statement failed to evaluate.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Writing the token echo failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
