use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use homework_watch::services::notifier::{ChannelError, MessageChannel, Notifier};
use homework_watch::services::review_api::{ApiError, ReviewApi};
use homework_watch::services::watcher::WatchEngine;

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub struct ScriptedApi {
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
}

#[allow(dead_code)]
impl ScriptedApi {
    pub fn new(responses: Vec<Result<Value, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ReviewApi for ScriptedApi {
    async fn fetch(&self, _from_date: i64) -> Result<Value, ApiError> {
        self.responses
            .lock()
            .await
            .pop_front()
            .expect("no scripted response left for this cycle")
    }
}

/// Message channel that records every delivered text and can be switched
/// into a failing mode to simulate an outage.
#[allow(dead_code)]
pub struct RecordingChannel {
    sent: Mutex<Vec<String>>,
    failing: AtomicBool,
}

#[allow(dead_code)]
impl RecordingChannel {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<String> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MessageChannel for RecordingChannel {
    async fn send_text(&self, _chat_id: &str, text: &str) -> Result<(), ChannelError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ChannelError("channel outage".to_string()));
        }
        self.sent.lock().await.push(text.to_string());
        Ok(())
    }
}

#[allow(dead_code)]
pub fn engine_with(api: Arc<ScriptedApi>, channel: Arc<RecordingChannel>) -> WatchEngine {
    let notifier = Notifier::new(channel, "chat-1".to_string());
    WatchEngine::new(api, notifier, Duration::from_secs(0))
}
