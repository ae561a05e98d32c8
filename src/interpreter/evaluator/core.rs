use std::io::Write;

use crate::{ast::Node, error::RuntimeError, interpreter::evaluator::print::print};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Node {
    /// Evaluates the node and returns its numeric value.
    ///
    /// Children are evaluated left to right before the node's own operator
    /// is applied. [`Node::Print`] writes its value to `out`; no other node
    /// has a side effect.
    ///
    /// # Errors
    /// - `UnsupportedOperator` if a relational node carries `and` or `or`.
    /// - `Output` if writing a printed value fails.
    ///
    /// # Example
    /// ```
    /// use lineval::ast::{BinaryOperator, Node};
    ///
    /// let node = Node::binary(Node::NumberLiteral(2.0),
    ///                         BinaryOperator::Pow,
    ///                         Node::NumberLiteral(10.0));
    ///
    /// assert_eq!(node.evaluate(&mut std::io::sink()).unwrap(), 1024.0);
    /// ```
    pub fn evaluate(&self, out: &mut dyn Write) -> EvalResult<f64> {
        match self {
            Self::NumberLiteral(value) => Ok(*value),
            Self::NoOp => Ok(0.0),
            Self::UnaryOp { op, operand } => Ok(op.apply(operand.evaluate(out)?)),
            Self::BinaryOp { left, op, right } => {
                let left = left.evaluate(out)?;
                let right = right.evaluate(out)?;
                Ok(op.apply(left, right))
            },
            Self::RelationalOp { left, op, right } => {
                let left = left.evaluate(out)?;
                let right = right.evaluate(out)?;
                op.apply(left, right)
            },
            Self::Print(expr) => {
                let value = expr.evaluate(out)?;
                print(value, out)
            },
        }
    }
}
