/// The token module defines the lexical units produced by the lexer.
///
/// A token pairs a [`token::TokenKind`] with a closed payload: either the
/// numeric value of a literal or the text it was written as. Its `Display`
/// form is the debug line echoed for every token of a line.
pub mod token;
/// The lexer module tokenizes one line of source code.
///
/// # Responsibilities
/// - Recognises numerals, words, operators, and parentheses.
/// - Folds a `-` into a signed numeral or keeps it as an operator, following a
///   fixed decision table.
/// - Expands `let NAME =` into its three tokens.
/// - Reports unrecognised characters and malformed numerals.
pub mod lexer;
/// The environment module holds the variables of a session.
///
/// Names are bound exactly once and live as long as the session.
pub mod environment;
/// The parser module builds the AST from tokens.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees using a two-level,
///   flat-precedence grammar.
/// - Binds declared variables in the environment while parsing.
/// - Resolves variable references to their current values.
pub mod parser;
/// The evaluator module computes the value of AST nodes.
///
/// Evaluation is the tree's own recursive contract: every node evaluates its
/// children and applies its operator.
pub mod evaluator;
/// The session module ties the phases together for one line at a time.
///
/// A session owns the environment shared by every line it interprets and the
/// options that shape lexing, parsing, and output.
pub mod session;
