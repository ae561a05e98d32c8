use crate::{
    ast::RelationalOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

impl RelationalOperator {
    /// Compares two operands, returning `1.0` when the relation holds and
    /// `0.0` otherwise.
    ///
    /// Equality is exact, without tolerance. Any comparison involving `NaN`
    /// is false.
    ///
    /// # Errors
    /// `UnsupportedOperator` for `And` and `Or`, which have no evaluation
    /// rule.
    ///
    /// # Example
    /// ```
    /// use lineval::ast::RelationalOperator;
    ///
    /// assert_eq!(RelationalOperator::Less.apply(3.0, 5.0).unwrap(), 1.0);
    /// assert_eq!(RelationalOperator::Equal.apply(0.1 + 0.2, 0.3).unwrap(), 0.0);
    /// assert!(RelationalOperator::And.apply(1.0, 1.0).is_err());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        let holds = match self {
            Self::Less => left < right,
            Self::Greater => left > right,
            Self::LessEqual => left <= right,
            Self::GreaterEqual => left >= right,
            Self::Equal => left == right,
            Self::And | Self::Or => {
                return Err(RuntimeError::UnsupportedOperator { op: self.to_string() });
            },
        };

        Ok(if holds { 1.0 } else { 0.0 })
    }
}
