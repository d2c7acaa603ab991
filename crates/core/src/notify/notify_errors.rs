use thiserror::Error;

/// Custom error type for notification delivery
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}
