mod config;
mod error;
mod logging;
mod models;
mod providers;
mod service;

use crate::config::{Config, DEFAULT_LOG_LEVEL};
use crate::providers::{practicum::Practicum, telegram::Telegram};
use crate::service::runtime::Runtime;

extern crate dotenv;

use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let dotenv_result = dotenv();

    let config = match Config::from_env() {
        Ok(config) => {
            logging::init_logging(&config.log_level);
            config
        }
        Err(e) => {
            logging::init_logging(DEFAULT_LOG_LEVEL);
            tracing::error!(error = %e, "cannot start without configuration");
            return Err(e.into());
        }
    };

    if let Err(e) = dotenv_result {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let practicum = Practicum::new(
        &config.endpoint,
        config.practicum_auth.clone(),
        config.request_timeout,
    )?;
    let telegram = Telegram::new(&config.telegram_token, &config.telegram_chat_id);

    let mut runtime = Runtime::new(practicum, telegram, config.retry_interval);
    runtime.run_periodically().await;

    Ok(())
}
