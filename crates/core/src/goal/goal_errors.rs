use thiserror::Error;

/// Custom error type for goal-store operations
#[derive(Debug, Error)]
pub enum GoalError {
    /// The persisted goal record exists but could not be parsed.
    #[error("Persisted goal is unreadable: {0}")]
    CorruptStore(String),

    /// A goal edit was rejected before reaching the store.
    #[error("Invalid goal target: {0}")]
    InvalidTarget(String),
}
