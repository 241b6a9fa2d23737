use std::sync::Arc;

use homework_watch::config::Config;
use homework_watch::services::notifier::{Notifier, TelegramChannel};
use homework_watch::services::review_api::PracticumClient;
use homework_watch::services::watcher::WatchEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_watch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing credentials are the only fatal condition
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        endpoint = %config.endpoint,
        retry_period_secs = config.retry_period.as_secs(),
        "starting homework watch"
    );

    let api = Arc::new(PracticumClient::new(
        config.endpoint,
        config.practicum_token,
    ));
    let channel = Arc::new(TelegramChannel::new(config.telegram_token));
    let notifier = Notifier::new(channel, config.telegram_chat_id);

    let engine = WatchEngine::new(api, notifier, config.retry_period);

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown requested");
            let _ = shutdown_tx.send(true);
        }
    });

    engine.run(shutdown_rx).await;
}
