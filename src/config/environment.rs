use std::env;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Environment configuration
/// Loads and validates environment variables
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub retry_period: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let practicum_token = require_var("PRACTICUM_TOKEN")?;
        let telegram_token = require_var("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require_var("TELEGRAM_CHAT_ID")?;

        let endpoint =
            env::var("REVIEW_API_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let retry_period = env::var("RETRY_PERIOD_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS));

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            retry_period,
        })
    }
}

fn require_var(name: &str) -> Result<String, String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", name)),
    }
}
