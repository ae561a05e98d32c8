use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Arithmetic never fails: division by zero and out-of-domain powers follow
/// IEEE 754 and produce `inf` or `NaN`.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An operator reached a node that has no evaluation rule for it.
    #[error("Unsupported operation '{op}'.")]
    UnsupportedOperator {
        /// The operator as written.
        op: String,
    },
    /// Writing the result of `print` failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
