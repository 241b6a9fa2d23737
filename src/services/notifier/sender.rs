use std::sync::Arc;

use crate::services::notifier::telegram::MessageChannel;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotifyError {
    #[error("failed to deliver message: {0}")]
    Delivery(String),
}

/// Sends text messages to the one configured chat.
///
/// Channel-level faults are normalized to `NotifyError::Delivery`; recovery
/// policy belongs entirely to the caller.
pub struct Notifier {
    channel: Arc<dyn MessageChannel>,
    chat_id: String,
}

impl Notifier {
    pub fn new(channel: Arc<dyn MessageChannel>, chat_id: String) -> Self {
        Self { channel, chat_id }
    }

    pub async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        match self.channel.send_text(&self.chat_id, message).await {
            Ok(()) => {
                tracing::debug!(%message, "message sent");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to send message");
                Err(NotifyError::Delivery(e.to_string()))
            }
        }
    }
}
