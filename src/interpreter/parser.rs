/// Core parser state and the statement loop.
///
/// Holds the token cursor and the borrowed environment, and returns the node
/// of the last statement in a token sequence.
pub mod core;

/// Statement parsing.
///
/// Declarations, `print`, and bare expressions. Declarations bind their
/// variable while parsing.
pub mod statement;

/// Binary operator parsing.
///
/// The expression and term precedence levels, each flat and left-associative.
pub mod binary;

/// Factor parsing.
///
/// Numbers, variable references, parenthesised expressions, and the prefix
/// minus extension.
pub mod unary;
