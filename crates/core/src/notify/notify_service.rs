use std::sync::Arc;

use log::{debug, warn};

use super::notify_traits::NotificationSink;

/// Fire-and-forget wrapper around a [`NotificationSink`].
///
/// Delivery failures are logged and dropped, never surfaced to the caller
/// and never retried.
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Notifier { sink }
    }

    /// Sends a message, swallowing any delivery failure.
    pub async fn notify(&self, message: &str) {
        match self.sink.send(message).await {
            Ok(()) => debug!("Notification delivered"),
            Err(e) => warn!("Notification dropped: {}", e),
        }
    }

    /// Spawns the send on the runtime and returns immediately.
    pub fn notify_detached(&self, message: String) {
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            if let Err(e) = sink.send(&message).await {
                warn!("Notification dropped: {}", e);
            }
        });
    }
}
