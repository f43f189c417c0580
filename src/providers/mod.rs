pub mod practicum;
pub mod telegram;


use serde_json::Value;

use crate::error::{NotifyError, PollError};

/// Where homework updates come from.
pub trait HomeworkSource {
    async fn fetch_updates(&self, since: i64) -> Result<Value, PollError>;
}

/// Where notifications go.
pub trait Notifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;

    /// Delivers `text`, logging the outcome. Never fails; the return value only
    /// tells the caller whether the message went out.
    async fn notify(&self, text: &str) -> bool {
        match self.send(text).await {
            Ok(()) => {
                tracing::info!(message = text, "message sent");
                true
            }
            Err(e) => {
                tracing::error!(message = text, error = %e, "message not sent");
                false
            }
        }
    }
}
