//! # lineval
//!
//! lineval is a line-oriented interpreter for a tiny arithmetic and relational
//! expression language. Every line is lexed, parsed and evaluated on its own,
//! while `let` bindings persist for the whole session.
//!
//! ```text
//! let x = 5
//! print x * 2 + 1
//! print x < 3
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use tracing::warn;

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operator enums that make up
/// the abstract syntax tree of one statement. The tree is built by the parser
/// and evaluated by the evaluator.
pub mod ast;
/// Provides the error types for lexing, parsing, and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase plus an umbrella `InterpretError`.
/// - Renders human-readable messages for the error stream.
pub mod error;
/// Orchestrates the interpretation of single lines.
///
/// This module ties together tokens, the lexer, the parser, the evaluator,
/// the variable environment, and the session that owns it.
pub mod interpreter;

pub use interpreter::session::{Options, Session};

/// Interprets every line of `source` in `session`.
///
/// Empty lines are skipped. Output of the lines, including the token echo and
/// anything printed, goes to `out`. A line that fails is reported to `err` as
/// `Error on line N: message`, and processing continues with the next line.
///
/// Returns the number of lines that failed.
///
/// # Errors
/// Returns an error only if writing to `err` fails.
///
/// # Example
/// ```
/// use lineval::{Options, Session, run_lines};
///
/// let mut session = Session::with_options(Options { echo_tokens: false,
///                                                   ..Options::default() });
/// let mut out = Vec::new();
/// let mut err = Vec::new();
///
/// let failures = run_lines("let x = 5\nprint y\nprint x + 1", &mut session, &mut out, &mut err)
///     .unwrap();
///
/// assert_eq!(failures, 1);
/// assert_eq!(String::from_utf8(out).unwrap(), "6\n");
/// assert_eq!(String::from_utf8(err).unwrap(), "Error on line 2: Undefined variable: y\n");
/// ```
pub fn run_lines<W: Write, E: Write>(source: &str,
                                     session: &mut Session,
                                     out: &mut W,
                                     err: &mut E)
                                     -> io::Result<usize> {
    let mut failures = 0;

    for (index, line) in source.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        if let Err(e) = session.interpret(line, out) {
            failures += 1;
            warn!(line = index + 1, error = %e, "line rejected");
            writeln!(err, "Error on line {}: {e}", index + 1)?;
        }
    }

    Ok(failures)
}

/// Runs the interactive prompt over `input` until `exit` or end of input.
///
/// Each line is preceded by a `>>> ` prompt on `out`. Lines are read as raw
/// bytes and decoded lossily, so invalid UTF-8 turns into `U+FFFD`, which the
/// lexer then reports like any other unknown character. Failures are written
/// to `err` as `Error: message` and the prompt continues.
///
/// # Errors
/// Returns an error if reading `input` or writing `out`/`err` fails.
///
/// # Example
/// ```
/// use lineval::{Options, Session, run_interactive};
///
/// let mut session = Session::with_options(Options { echo_tokens: false,
///                                                   ..Options::default() });
/// let mut out = Vec::new();
/// let mut err = Vec::new();
///
/// run_interactive(&b"print 2 * 3\nexit\nprint 1\n"[..], &mut session, &mut out, &mut err)
///     .unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), ">>> 6\n>>> ");
/// ```
pub fn run_interactive<R: BufRead, W: Write, E: Write>(mut input: R,
                                                       session: &mut Session,
                                                       out: &mut W,
                                                       err: &mut E)
                                                       -> io::Result<()> {
    let mut buffer = Vec::new();

    loop {
        write!(out, ">>> ")?;
        out.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buffer);
        let line = line.trim_end_matches(['\n', '\r']);
        if line == "exit" {
            break;
        }

        if let Err(e) = session.interpret(line, out) {
            warn!(error = %e, "line rejected");
            writeln!(err, "Error: {e}")?;
        }
    }

    Ok(())
}
