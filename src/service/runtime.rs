use chrono::Utc;
use tokio::time::{sleep, Duration};

use crate::{
    error::PollError,
    providers::practicum::check_response,
    providers::{HomeworkSource, Notifier},
    service::status::{failure_message, parse_status},
};

pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

/// The poll loop. Owns the cursor and the last delivered message; both live
/// only as long as the process.
pub struct Runtime<S, N> {
    source: S,
    notifier: N,
    retry_interval: Duration,
    clock: fn() -> i64,
    current_timestamp: i64,
    last_message: String,
}

#[derive(Debug, PartialEq)]
pub enum CycleOutcome {
    /// A status message went out.
    Notified,
    /// The message matched the last delivered one.
    Duplicate,
    /// The API reported nothing new.
    NoUpdates,
    /// Delivery of a fresh message failed. The cursor stays put so the same
    /// update comes back next cycle.
    Undelivered,
    /// The cycle failed and a failure notice was routed to the chat.
    Failed(PollError),
}

impl<S: HomeworkSource, N: Notifier> Runtime<S, N> {
    pub fn new(source: S, notifier: N, retry_interval: Duration) -> Self {
        Self::with_clock(source, notifier, retry_interval, unix_now)
    }

    pub fn with_clock(source: S, notifier: N, retry_interval: Duration, clock: fn() -> i64) -> Self {
        Runtime {
            source,
            notifier,
            retry_interval,
            clock,
            current_timestamp: clock(),
            last_message: String::new(),
        }
    }

    pub fn cursor(&self) -> i64 {
        self.current_timestamp
    }

    #[cfg(test)]
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    #[cfg(test)]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    // fetch, validate, format; Ok(None) when there is nothing new
    async fn check_updates(&self) -> Result<Option<String>, PollError> {
        let response = self.source.fetch_updates(self.current_timestamp).await?;
        let homeworks = check_response(&response)?;
        tracing::debug!(count = homeworks.len(), "homeworks received");

        // only the newest entry is reported
        match homeworks.first() {
            Some(homework) => parse_status(homework).map(Some),
            None => Ok(None),
        }
    }

    /// Sends `message` unless it is the one already delivered. Returns whether
    /// the chat was actually reached.
    async fn send_if_new(&mut self, message: &str) -> Option<bool> {
        if message == self.last_message {
            tracing::debug!("message unchanged, not resending");
            return None;
        }
        let delivered = self.notifier.notify(message).await;
        if delivered {
            self.last_message = message.to_string();
        }
        Some(delivered)
    }

    /// Runs one poll cycle. Never fails; errors become failure notices.
    pub async fn run_once(&mut self) -> CycleOutcome {
        match self.check_updates().await {
            Ok(Some(message)) => {
                match self.send_if_new(&message).await {
                    None => {
                        self.current_timestamp = (self.clock)();
                        CycleOutcome::Duplicate
                    }
                    Some(true) => {
                        self.current_timestamp = (self.clock)();
                        CycleOutcome::Notified
                    }
                    Some(false) => CycleOutcome::Undelivered,
                }
            }
            Ok(None) => {
                tracing::debug!("no status changes");
                CycleOutcome::NoUpdates
            }
            Err(e) => {
                tracing::error!(error = %e, "poll cycle failed");
                self.send_if_new(&failure_message(&e)).await;
                CycleOutcome::Failed(e)
            }
        }
    }

    pub async fn run_periodically(&mut self) {
        tracing::info!(
            interval_secs = self.retry_interval.as_secs(),
            from_date = self.cursor(),
            "starting homework poller"
        );

        loop {
            let outcome = self.run_once().await;
            tracing::info!(?outcome, cursor = self.cursor(), "poll cycle finished");
            sleep(self.retry_interval).await;
        }
    }
}
