//! Notification module - fire-and-forget messages to an external chat hook.

mod notify_errors;
mod notify_service;
mod notify_traits;
mod webhook;


pub use notify_errors::NotifyError;
pub use notify_service::Notifier;
pub use notify_traits::NotificationSink;
pub use webhook::WebhookSink;
