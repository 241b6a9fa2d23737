use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ChannelError(pub String);

/// Seam for the delivery channel; the engine only ever talks text.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<(), ChannelError>;
}

/// Telegram Bot API channel
pub struct TelegramChannel {
    client: Client,
    token: String,
}

impl TelegramChannel {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            token,
        }
    }

    fn send_message_url(&self) -> String {
        format!("https://api.telegram.org/bot{}/sendMessage", self.token)
    }
}

#[async_trait]
impl MessageChannel for TelegramChannel {
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<(), ChannelError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| ChannelError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChannelError(format!(
                "Telegram returned status: {}",
                response.status()
            )));
        }

        // Telegram wraps errors in a 200 envelope with ok = false
        let body: Value = response
            .json()
            .await
            .map_err(|e| ChannelError(e.to_string()))?;
        if body.get("ok").and_then(Value::as_bool) != Some(true) {
            let description = body
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("no description");
            return Err(ChannelError(format!("Telegram rejected message: {}", description)));
        }

        Ok(())
    }
}
