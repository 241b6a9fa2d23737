use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::services::notifier::Notifier;
use crate::services::review_api::{check_response, ApiError, ReviewApi, Submission};
use crate::services::verdict::compose_message;

/// Mutable per-loop state, owned by whichever loop runs the cycles.
///
/// `cursor` is the lower bound for the next poll window; it only moves
/// forward, and only after a new status was successfully notified.
/// `last_message` is the dedup slot shared by the success and fault paths.
pub struct CycleState {
    pub cursor: i64,
    pub last_message: String,
}

impl CycleState {
    pub fn starting_now() -> Self {
        Self {
            cursor: Utc::now().timestamp(),
            last_message: String::new(),
        }
    }
}

pub struct WatchEngine {
    api: Arc<dyn ReviewApi>,
    notifier: Notifier,
    retry_period: Duration,
}

impl WatchEngine {
    pub fn new(api: Arc<dyn ReviewApi>, notifier: Notifier, retry_period: Duration) -> Self {
        Self {
            api,
            notifier,
            retry_period,
        }
    }

    /// Run the polling loop until the shutdown flag flips.
    ///
    /// The sleep between cycles is fixed and unconditional: it is enforced
    /// after handled faults exactly as after clean cycles.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut state = CycleState::starting_now();
        tracing::info!(cursor = state.cursor, "watch engine started");

        loop {
            if *shutdown.borrow() {
                break;
            }

            self.run_cycle(&mut state).await;

            tokio::select! {
                _ = tokio::time::sleep(self.retry_period) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        tracing::info!("watch engine stopped");
    }

    /// One poll -> validate -> translate -> notify pass over `state`.
    pub async fn run_cycle(&self, state: &mut CycleState) {
        match self.derive_message(state.cursor).await {
            Ok(Some(message)) => {
                if message == state.last_message {
                    tracing::info!("status unchanged since last notification");
                    return;
                }
                match self.notifier.notify(&message).await {
                    Ok(()) => {
                        state.last_message = message;
                        state.cursor = Utc::now().timestamp();
                    }
                    Err(e) => {
                        // Cursor and dedup slot stay put: the same status will
                        // be re-derived from the API on the next cycle.
                        tracing::error!(error = %e, "delivery failed, will retry next cycle");
                    }
                }
            }
            Ok(None) => tracing::info!("no submissions yet"),
            Err(e) => self.report_fault(state, e).await,
        }
    }

    /// Fetch and validate the poll window, translating the most recent
    /// submission into a chat message. `None` means the window was empty.
    async fn derive_message(&self, cursor: i64) -> Result<Option<String>, ApiError> {
        let response = self.api.fetch(cursor).await?;
        let homeworks = check_response(&response)?;

        let first = match homeworks.first() {
            Some(first) => first,
            None => return Ok(None),
        };

        let submission = Submission::from_value(first)?;
        Ok(Some(compose_message(&submission)?))
    }

    /// Generic-fault path: notify the operator once per distinct diagnostic,
    /// suppress identical repeats with a log line only.
    async fn report_fault(&self, state: &mut CycleState, error: ApiError) {
        let message = format!("Program failure: {}", error);

        if message == state.last_message {
            tracing::error!(%message, "repeated failure, notification suppressed");
            return;
        }

        tracing::error!(%message, "cycle failed");
        if let Err(e) = self.notifier.notify(&message).await {
            tracing::error!(error = %e, "could not notify operator about the failure");
        }
        // Updated even when the operator notification itself failed, so a
        // persistent outage never storms the channel once it recovers.
        state.last_message = message;
    }
}
