use crate::ast::UnaryOperator;

impl UnaryOperator {
    /// Applies the operator to its operand.
    #[must_use]
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            Self::Negate => -operand,
        }
    }
}
