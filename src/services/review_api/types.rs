use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One homework record as reported by the review API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub homework_name: String,
    pub status: String,
}

impl Submission {
    /// Extract a submission from a raw API record, requiring both fields.
    pub fn from_value(value: &Value) -> Result<Self, ApiError> {
        let homework_name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(ApiError::MissingKey("homework_name"))?;
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .ok_or(ApiError::MissingKey("status"))?;

        Ok(Self {
            homework_name: homework_name.to_string(),
            status: status.to_string(),
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("review API gave no usable response ({reason}): url = {url}, from_date = {from_date}")]
    EmptyResponse {
        url: String,
        from_date: i64,
        reason: String,
    },
    #[error("unexpected response shape: {0}")]
    TypeMismatch(String),
    #[error("key '{0}' is missing from the response")]
    MissingKey(&'static str),
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),
}
