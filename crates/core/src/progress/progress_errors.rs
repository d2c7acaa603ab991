use thiserror::Error;

/// Custom error type for progress calculation
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Unreachable when goals are validated at the store boundary, but
    /// guarded here so a bypassed validation cannot crash the process.
    #[error("Target amount is zero; progress is undefined")]
    ZeroTarget,
}
