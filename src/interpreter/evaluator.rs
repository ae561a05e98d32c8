/// Core evaluation logic.
///
/// The recursive `evaluate` contract shared by every node.
pub mod core;

/// Arithmetic operator evaluation.
///
/// `+`, `-`, `*`, `/` and `^` with IEEE 754 semantics.
pub mod binary;

/// Comparison evaluation.
///
/// Relational and equality operators yielding `1.0` or `0.0`.
pub mod comparison;

/// Unary operator evaluation.
pub mod unary;

/// The `print` side effect.
pub mod print;
