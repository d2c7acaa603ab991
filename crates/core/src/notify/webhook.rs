use async_trait::async_trait;
use serde_json::json;

use super::notify_errors::NotifyError;
use super::notify_traits::NotificationSink;
use crate::errors::Result;

/// Chat-bot webhook sink: POSTs `{"text": ...}` to a configured URL.
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>) -> Self {
        WebhookSink {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    async fn send(&self, message: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "text": message }))
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        response
            .error_for_status()
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        Ok(())
    }
}
