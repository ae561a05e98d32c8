use std::io::Write;

use crate::interpreter::evaluator::core::EvalResult;

/// Writes a value followed by a newline and returns it unchanged.
///
/// Whole numbers print without a fractional part (`20`, `-3`), other values
/// in their shortest exact decimal form (`0.1`), and the IEEE specials as
/// `inf`, `-inf` and `NaN`.
///
/// # Example
/// ```
/// use lineval::interpreter::evaluator::print::print;
///
/// let mut out = Vec::new();
/// let value = print(2.5, &mut out).unwrap();
///
/// assert_eq!(value, 2.5);
/// assert_eq!(out, b"2.5\n");
/// ```
pub fn print(value: f64, out: &mut dyn Write) -> EvalResult<f64> {
    writeln!(out, "{value}")?;
    Ok(value)
}
