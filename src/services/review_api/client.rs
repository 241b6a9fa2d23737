use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::services::review_api::types::ApiError;

/// Seam for the review API so the watch engine can run against fakes in tests.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError>;
}

/// Practicum homework-status API client
/// Handles all communication with the review endpoint
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            endpoint,
            token,
        }
    }

    fn empty_response(&self, from_date: i64, reason: impl Into<String>) -> ApiError {
        ApiError::EmptyResponse {
            url: self.endpoint.clone(),
            from_date,
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ReviewApi for PracticumClient {
    /// Fetch homework statuses changed since `from_date`.
    ///
    /// Any transport fault, non-success status code, or undecodable body is
    /// collapsed into `ApiError::EmptyResponse`; retrying is the engine's
    /// concern, not the client's.
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| self.empty_response(from_date, e.to_string()))?;

        if !response.status().is_success() {
            return Err(self.empty_response(
                from_date,
                format!("API returned status: {}", response.status()),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| self.empty_response(from_date, e.to_string()))
    }
}
