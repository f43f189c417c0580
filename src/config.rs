use std::env;
use std::time::Duration;

use reqwest::header::HeaderValue;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_SECS: u64 = 600;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Everything the notifier needs, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `OAuth <token>`, marked sensitive so it never shows up in `Debug`.
    pub practicum_auth: HeaderValue,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub retry_interval: Duration,
    pub request_timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. All missing
    /// credentials are reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut missing = Vec::new();
        let mut required = |name: &'static str| {
            let value = read(name);
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };
        let practicum_token = required("PRACTICUM_TOKEN");
        let telegram_token = required("TELEGRAM_TOKEN");
        let telegram_chat_id = required("TELEGRAM_CHAT_ID");
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let seconds = |name: &'static str, default: u64| -> Result<Duration, ConfigError> {
            match read(name) {
                None => Ok(Duration::from_secs(default)),
                Some(raw) => match raw.parse::<u64>() {
                    Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                    _ => Err(ConfigError::Invalid { name, value: raw }),
                },
            }
        };

        let mut practicum_auth = HeaderValue::from_str(&format!("OAuth {}", practicum_token))
            .map_err(|_| ConfigError::Unusable {
                name: "PRACTICUM_TOKEN",
                reason: "not a valid HTTP header value",
            })?;
        practicum_auth.set_sensitive(true);

        Ok(Config {
            practicum_auth,
            telegram_token,
            telegram_chat_id,
            endpoint: read("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            retry_interval: seconds("RETRY_TIME", DEFAULT_RETRY_SECS)?,
            request_timeout: seconds("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            log_level: read("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}
