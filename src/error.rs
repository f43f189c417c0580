//! Error types for the notifier.
//!
//! Everything a poll cycle can hit lands in `PollError`; the loop turns it
//! into a failure notification. `ConfigError` is only ever raised before the
//! loop starts and is the one fatal case. `NotifyError` never leaves the
//! telegram provider's `notify`.

use std::fmt;

/// Errors raised by one fetch–validate–format cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    /// The request could not be completed (DNS, timeout, connection reset).
    Transport(String),

    /// The review API answered with something other than 200.
    EndpointUnavailable { status: u16 },

    /// The payload did not have the expected shape.
    Schema(String),

    /// A homework record is missing a required key.
    MissingField(&'static str),

    /// A homework record carries a status outside the catalog.
    UnknownStatus(String),
}

impl fmt::Display for PollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollError::Transport(msg) => write!(f, "request to the review API failed: {msg}"),
            PollError::EndpointUnavailable { status } => {
                write!(f, "review API endpoint unavailable (HTTP {status})")
            }
            PollError::Schema(msg) => write!(f, "unexpected API response: {msg}"),
            PollError::MissingField(field) => write!(f, "homework record has no `{field}` key"),
            PollError::UnknownStatus(status) => write!(f, "unknown homework status: {status}"),
        }
    }
}

impl std::error::Error for PollError {}

/// Startup configuration problems. Fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required variables that are unset or blank, in lookup order.
    Missing(Vec<&'static str>),

    /// A tunable is present but cannot be parsed.
    Invalid { name: &'static str, value: String },

    /// A secret that cannot be used as given. The value is not echoed.
    Unusable { name: &'static str, reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(names) => {
                write!(f, "missing required environment variables: {}", names.join(", "))
            }
            ConfigError::Invalid { name, value } => {
                write!(f, "invalid value for {name}: {value:?}")
            }
            ConfigError::Unusable { name, reason } => write!(f, "unusable {name}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Delivery to the chat failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError(pub String);

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to deliver message: {}", self.0)
    }
}

impl std::error::Error for NotifyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_lists_every_name() {
        let err = ConfigError::Missing(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }

    #[test]
    fn endpoint_error_mentions_status() {
        let err = PollError::EndpointUnavailable { status: 503 };
        assert!(err.to_string().contains("503"));
    }
}
