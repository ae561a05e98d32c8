use crate::ast::BinaryOperator;

impl BinaryOperator {
    /// Applies the operator to two operands.
    ///
    /// There is no error path: division by zero yields `inf` or `NaN`, and
    /// `^` follows [`f64::powf`], including `NaN` for a negative base with a
    /// fractional exponent.
    ///
    /// # Example
    /// ```
    /// use lineval::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(BinaryOperator::Pow.apply(-8.0, 0.5).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}
