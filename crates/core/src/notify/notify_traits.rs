use crate::errors::Result;
use async_trait::async_trait;

/// Outbound sink for one-line status messages, e.g. a chat-bot webhook.
///
/// Implementations are opaque remote collaborators: the core only sees
/// success or a delivery error, never the transport details.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, message: &str) -> Result<()>;
}
