use thiserror::Error;

/// Custom error type for the remote image studio
#[derive(Debug, Error)]
pub enum ImageStudioError {
    #[error("Remote image service failed: {0}")]
    Remote(String),
}
