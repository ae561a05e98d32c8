use std::io::Write;

use tracing::debug;

use crate::{
    error::InterpretError,
    interpreter::{environment::Environment, lexer::tokenize, parser::core::Parser},
};

/// Settings that shape how a session interprets its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Write one `KIND | payload` line per token before evaluating.
    pub echo_tokens: bool,
    /// Accept `-` at the start of an operand as negation. When `false`, only
    /// the lexer's sign folding produces negative values and a leading `-`
    /// is a parse error.
    pub unary_minus: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { echo_tokens: true,
               unary_minus: true, }
    }
}

/// Interprets a single line against `environment`.
///
/// The line is lexed, its tokens are optionally echoed to `out`, then it is
/// parsed and the last statement is evaluated. Declarations are bound while
/// parsing, so they persist even if a later statement on the same line fails.
///
/// Returns `Ok(None)` when the line contains no tokens, otherwise the value of
/// the last statement. The value of a bare expression is returned but never
/// written; only `print` writes.
///
/// # Errors
/// Returns an [`InterpretError`] describing the first lex, parse or runtime
/// failure on the line.
pub fn interpret_line<W: Write>(line: &str,
                                environment: &mut Environment,
                                options: Options,
                                out: &mut W)
                                -> Result<Option<f64>, InterpretError> {
    let tokens = tokenize(line, environment)?;

    if options.echo_tokens {
        for token in &tokens {
            writeln!(out, "{token}")?;
        }
    }

    if tokens.is_empty() {
        return Ok(None);
    }

    let root = Parser::new(&tokens, environment).unary_minus(options.unary_minus)
                                                .parse()?;
    let value = root.evaluate(out)?;
    debug!(value, "evaluated line");

    Ok(Some(value))
}

/// An interpreter session.
///
/// Owns the [`Environment`] shared by every line it interprets. Lines are
/// processed one at a time; a failing line leaves behind whatever it bound
/// before failing and does not end the session.
///
/// # Example
/// ```
/// use lineval::Session;
///
/// let mut session = Session::new();
/// let mut out = Vec::new();
///
/// session.interpret("let x = 5", &mut out).unwrap();
/// assert_eq!(session.interpret("x + 1", &mut out).unwrap(), Some(6.0));
/// assert!(session.interpret("let x = 1", &mut out).is_err());
/// assert_eq!(session.environment().get("x"), Some(5.0));
/// ```
#[derive(Debug, Default)]
pub struct Session {
    environment: Environment,
    options:     Options,
}

impl Session {
    /// Creates a session with an empty environment and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with an empty environment and the given options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { environment: Environment::new(),
               options }
    }

    /// The options of this session.
    #[must_use]
    pub const fn options(&self) -> Options {
        self.options
    }

    /// The variables declared so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Interprets one line. See [`interpret_line`].
    ///
    /// # Errors
    /// See [`interpret_line`].
    pub fn interpret<W: Write>(&mut self,
                               line: &str,
                               out: &mut W)
                               -> Result<Option<f64>, InterpretError> {
        interpret_line(line, &mut self.environment, self.options, out)
    }
}
